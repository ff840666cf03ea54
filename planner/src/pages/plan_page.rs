use dto::plan::{PlanDto, AREA_MAX_LEN, NAME_MAX_LEN};
use leptos::{ev::SubmitEvent, logging::log, prelude::*};

use crate::{
    components::{availability_rows::AvailabilityRows, status::StatusLine},
    config::use_config,
    form::controller::PlanForm,
    services::submit::submit_plan,
};

#[component]
pub fn PlanPage() -> impl IntoView {
    let config = use_config();
    let form = PlanForm::new();

    let submit = Action::new_local({
        let config = config.clone();
        move |plan: &PlanDto| {
            let plan = plan.clone();
            let endpoint = config.endpoint.clone();
            let messages = config.messages.clone();
            async move {
                let result = submit_plan(&endpoint, &plan).await;
                form.finish_submission(result, &messages);
            }
        }
    });

    let pending = submit.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(plan) = form.begin_submission(pending.get_untracked(), &config.messages) {
            log!(
                "Submitting plan with {} availability windows",
                plan.availabilities.len()
            );
            submit.dispatch(plan);
        }
    };

    view! {
        <form id="plan-form" class="flex flex-col gap-2 w-full max-w-xl" on:submit=on_submit>
            <h1 class="text-center text-lg">予定フォーム</h1>

            <TextField id="name" label="名前" value=form.name max_len=NAME_MAX_LEN required=true />
            <TextField id="area" label="行動範囲" value=form.area max_len=AREA_MAX_LEN required=true />

            <AvailabilityRows rows=form.rows />

            <TextField id="food-dislike" label="嫌いな食べ物" value=form.food_dislike />
            <TextField id="food-weak" label="苦手な食べ物" value=form.food_weak />
            <TextField id="food-cant" label="食べられないもの" value=form.food_cant />
            <TextField id="food-want" label="今一番食べたいもの" value=form.food_want />

            <div class="flex flex-row justify-end">
                <button type="submit" class="btn save" disabled=pending>
                    送信
                </button>
            </div>

            <StatusLine status=form.status />
        </form>
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] max_len: Option<usize>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="flex flex-col">
            <label for=id>{label}</label>
            <input
                class="input"
                id=id
                name=id
                bind:value=value
                maxlength=max_len.map(|len| len.to_string())
                required=required
            />
        </div>
    }
}

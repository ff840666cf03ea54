use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::{
    config::{provide_config, PlannerConfig},
    pages::plan_page::PlanPage,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_config(PlannerConfig::default());

    view! {
        <Title text="予定フォーム" />

        <Router>
            <main class="flex flex-col items-center p-2 gap-2">
                <Routes fallback=|| "ページが見つかりません".into_view()>
                    <Route path=path!("/") view=PlanPage />
                </Routes>
            </main>
        </Router>
    }
}

use leptos::prelude::*;
use uuid::Uuid;

use crate::{
    form::rows::{RowField, RowList},
    icons::{add::AddIcon, close::CloseIcon},
};

#[component]
pub fn AvailabilityRows(rows: RwSignal<RowList>) -> impl IntoView {
    view! {
        <fieldset class="flex flex-col gap-2">
            <legend>空いている日・時間</legend>
            <ul id="availability-list" class="flex flex-col gap-2">
                <For each=move || rows.with(|list| list.keys()) key=|key: &Uuid| *key let:key>
                    <AvailabilityRowView rows key />
                </For>
            </ul>
            <button
                type="button"
                class="btn flex flex-row gap-1 items-center self-start"
                data-testid="add-row"
                on:click=move |_| rows.update(|list| list.add_row())
            >
                <AddIcon />
                日時を追加
            </button>
        </fieldset>
    }
}

#[component]
fn AvailabilityRowView(rows: RwSignal<RowList>, key: Uuid) -> impl IntoView {
    view! {
        <li class="availability-row flex flex-row gap-2 items-end">
            <RowInput rows key field=RowField::Date input_type="date" label="日付" />
            <RowInput rows key field=RowField::Start input_type="time" label="開始" />
            <RowInput rows key field=RowField::End input_type="time" label="終了" />
            <button
                type="button"
                class="btn cancel"
                title="この行を削除"
                on:click=move |_| rows.update(|list| list.remove(key))
            >
                <CloseIcon />
            </button>
        </li>
    }
}

#[component]
fn RowInput(
    rows: RwSignal<RowList>,
    key: Uuid,
    field: RowField,
    input_type: &'static str,
    label: &'static str,
) -> impl IntoView {
    let value = move || {
        rows.with(|list| {
            list.get(key)
                .map(|row| row.get(field).to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <label class="flex flex-col flex-1">
            <span class="text-sm">{label}</span>
            <input
                class="input"
                type=input_type
                name=field.name()
                required=true
                prop:value=value
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    rows.update(|list| list.set_field(key, field, value));
                }
            />
        </label>
    }
}

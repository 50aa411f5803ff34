//! Leptos components for the product table.

use leptos::*;

use catalog_products::{Column, SortDirection};

use crate::api;
use crate::state::ProductView;

/// Root component.
#[component]
pub fn App() -> impl IntoView {
    view! { <ProductTable/> }
}

/// Filters sidebar, sortable table, and pager over one fetch of the catalogue.
#[component]
fn ProductTable() -> impl IntoView {
    let state = create_rw_signal(ProductView::new());

    // Fetched once per mount. A failure is logged and the table stays empty.
    spawn_local(async move {
        match api::fetch_products().await {
            Ok(products) => state.update(|v| v.load(products)),
            Err(err) => leptos::logging::error!("Error fetching products: {err}"),
        }
    });

    view! {
        <div class="bg-gray-100 min-h-screen">
            <h1 class="text-2xl mx-auto px-4 py-8">"Product Table"</h1>
            <div class="flex">
                <FilterPanel state=state/>
                <div class="w-3/4 p-4">
                    <table class="w-full bg-white shadow-md rounded my-6">
                        <thead>
                            <tr>{move || header_cells(state)}</tr>
                        </thead>
                        <tbody>{move || body_rows(state)}</tbody>
                    </table>
                    <Pager state=state/>
                </div>
            </div>
        </div>
    }
}

const HEADER_CELL_CLASS: &str = "px-4 py-2 border-b-2 border-gray-300 text-left text-xs \
    font-semibold uppercase tracking-wider cursor-pointer";

fn header_cells(state: RwSignal<ProductView>) -> View {
    state.with(|v| {
        v.columns()
            .iter()
            .map(|&column| {
                let label = format!("{}{}", column.header(), sort_marker(v.sort_direction(column)));
                view! {
                    <th
                        class=HEADER_CELL_CLASS
                        on:click=move |_| state.update(|v| v.toggle_sort(column))
                    >
                        {label}
                    </th>
                }
            })
            .collect_view()
    })
}

fn body_rows(state: RwSignal<ProductView>) -> View {
    state.with(|v| {
        let columns = v.columns();
        v.page()
            .into_iter()
            .map(|product| {
                let cells = columns
                    .iter()
                    .map(|&column| {
                        let text = product.field(column).into_owned();
                        view! { <td class="px-4 py-4 border-b border-gray-300">{text}</td> }
                    })
                    .collect_view();
                view! { <tr class="hover:bg-gray-100">{cells}</tr> }
            })
            .collect_view()
    })
}

fn sort_marker(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " 🔼",
        Some(SortDirection::Descending) => " 🔽",
        None => "",
    }
}

#[component]
fn FilterPanel(state: RwSignal<ProductView>) -> impl IntoView {
    // Options only change on load, so checkbox nodes survive filter clicks.
    let options = create_memo(move |_| state.with(|v| v.options().clone()));

    view! {
        <div class="w-1/4 p-4 bg-gray-200">
            <h2 class="text-xl font-semibold mb-4">"Filters"</h2>
            {move || {
                options.with(|options| {
                    options
                        .iter()
                        .map(|(column, values)| {
                            let checkboxes = values
                                .iter()
                                .map(|value| filter_checkbox(state, column, value.clone()))
                                .collect_view();
                            view! {
                                <div class="mb-4">
                                    <label class="block mb-2 font-bold">
                                        {format!("{}:", column.header())}
                                    </label>
                                    {checkboxes}
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}

fn filter_checkbox(state: RwSignal<ProductView>, column: Column, value: String) -> View {
    let attr_value = value.clone();
    let checked_value = value.clone();
    let event_value = value.clone();

    view! {
        <div class="mb-2">
            <label>
                <input
                    type="checkbox"
                    class="mr-2"
                    value=attr_value
                    prop:checked=move || state.with(|v| v.is_checked(column, &checked_value))
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        state.update(|v| v.set_filter(column, event_value.clone(), checked));
                    }
                />
                {value}
            </label>
        </div>
    }
    .into_view()
}

#[component]
fn Pager(state: RwSignal<ProductView>) -> impl IntoView {
    let can_previous = move || state.with(ProductView::can_previous_page);
    let can_next = move || state.with(ProductView::can_next_page);

    view! {
        <div class="text-center">
            <button
                disabled=move || !can_previous()
                on:click=move |_| state.update(ProductView::previous_page)
                class=move || pager_button_class("rounded-l", can_previous())
            >
                "Prev"
            </button>
            <span>{move || state.with(|v| format!(" {} ", v.page_label()))}</span>
            <button
                disabled=move || !can_next()
                on:click=move |_| state.update(ProductView::next_page)
                class=move || pager_button_class("rounded-r", can_next())
            >
                "Next"
            </button>
        </div>
    }
}

fn pager_button_class(edge: &str, enabled: bool) -> String {
    let base = format!("bg-gray-300 hover:bg-gray-400 text-gray-800 font-bold py-2 px-4 {edge}");
    if enabled {
        base
    } else {
        format!("{base} cursor-not-allowed opacity-50")
    }
}

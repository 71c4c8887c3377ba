pub mod state;

use yew::prelude::*;

use super::common::pagination::Pagination;
pub use state::{CellValue, GridColumn, GridRecord, GridState, SortDirection};

#[derive(Properties, PartialEq)]
pub struct DataGridProps<R: GridRecord + PartialEq + 'static> {
    pub rows: Vec<R>,
    pub columns: Vec<GridColumn>,
    #[prop_or(vec![5, 10])]
    pub page_size_options: Vec<usize>,
    /// Adds a checkbox column and a select-all header checkbox
    #[prop_or_default]
    pub checkbox_selection: bool,
    /// Whether clicking anywhere on a row toggles its selection
    #[prop_or(true)]
    pub row_click_selection: bool,
}

/// Sortable, pageable table with optional checkbox selection
#[function_component(DataGrid)]
pub fn data_grid<R>(props: &DataGridProps<R>) -> Html
where
    R: GridRecord + PartialEq + 'static,
{
    let initial_page_size = props.page_size_options.first().copied().unwrap_or(10);
    let state = use_state(|| GridState::new(initial_page_size));

    let total_rows = props.rows.len();
    let visible_ids = state.visible_ids(&props.rows);

    let on_sort = |field: &'static str| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("Toggling sort on column {}", field);
            state.set(state.toggle_sort(field));
        })
    };

    let on_toggle_row = |id: u32| {
        let state = state.clone();
        Callback::from(move |_: Event| state.set(state.toggle_row(id)))
    };

    let on_row_click = |id: u32| {
        let state = state.clone();
        let enabled = props.row_click_selection;
        Callback::from(move |_: MouseEvent| {
            if enabled {
                state.set(state.toggle_row(id));
            }
        })
    };

    let on_toggle_all = {
        let state = state.clone();
        let visible_ids = visible_ids.clone();
        Callback::from(move |_: Event| state.set(state.toggle_all(&visible_ids)))
    };

    let on_page_change = {
        let state = state.clone();
        Callback::from(move |page: usize| state.set(state.set_page(page, total_rows)))
    };

    let on_page_size_change = {
        let state = state.clone();
        Callback::from(move |size: usize| state.set(state.set_page_size(size)))
    };

    let sort_icon = |field: &str| match &state.sort {
        Some(sort) if sort.field == field => match sort.direction {
            SortDirection::Ascending => "fas fa-sort-up",
            SortDirection::Descending => "fas fa-sort-down",
        },
        _ => "fas fa-sort opacity-30",
    };

    html! {
        <div class="flex flex-col">
            <div class="overflow-x-auto">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            if props.checkbox_selection {
                                <th class="w-12">
                                    <input
                                        type="checkbox"
                                        class="checkbox checkbox-sm"
                                        checked={state.all_selected(&visible_ids)}
                                        onchange={on_toggle_all}
                                    />
                                </th>
                            }
                            { for props.columns.iter().map(|column| {
                                let style = format!("width: {}px", column.width);
                                if column.sortable {
                                    html! {
                                        <th style={style} class="cursor-pointer select-none" onclick={on_sort(column.field)}>
                                            {column.header_name}{" "}
                                            <i class={sort_icon(column.field)}></i>
                                        </th>
                                    }
                                } else {
                                    html! { <th style={style}>{column.header_name}</th> }
                                }
                            }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for state.view(&props.rows).into_iter().map(|row| {
                            let id = row.id();
                            let selected = state.is_selected(id);
                            html! {
                                <tr
                                    key={id}
                                    class={classes!("hover", selected.then_some("bg-primary/10"))}
                                    onclick={on_row_click(id)}
                                >
                                    if props.checkbox_selection {
                                        <td>
                                            <input
                                                type="checkbox"
                                                class="checkbox checkbox-sm"
                                                checked={selected}
                                                onchange={on_toggle_row(id)}
                                                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                                            />
                                        </td>
                                    }
                                    { for props.columns.iter().map(|column| html! {
                                        <td>{row.cell(column.field).to_string()}</td>
                                    }) }
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>

            <div class="flex items-center justify-between px-4 border-t border-base-300">
                <span class="text-sm text-base-content/70">
                    if !state.selected.is_empty() {
                        {format!("{} row(s) selected", state.selected.len())}
                    }
                </span>
                <Pagination
                    current_page={state.page}
                    total_items={total_rows}
                    items_per_page={state.page_size}
                    on_page_change={on_page_change}
                    page_size_options={props.page_size_options.clone()}
                    on_page_size_change={Some(on_page_size_change)}
                />
            </div>
        </div>
    }
}

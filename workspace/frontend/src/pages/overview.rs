use chrono::Local;
use yew::prelude::*;

use crate::components::data_grid::{DataGrid, DataGridProps};
use crate::components::date_range::{DateRange, DateRangePicker, RangeSelection};
use crate::mock_data::{get_mock_bill_columns, get_mock_bills, BillRow};

const RANGE_FORMAT: &str = "%b %-d, %Y";

/// Grid over the placeholder bills: checkbox selection only, rows do not
/// select on click.
pub fn bills_grid_props() -> DataGridProps<BillRow> {
    DataGridProps {
        rows: get_mock_bills(),
        columns: get_mock_bill_columns(),
        page_size_options: vec![5, 10],
        checkbox_selection: true,
        row_click_selection: false,
    }
}

pub fn describe_range(range: &DateRange) -> String {
    format!(
        "{} to {} ({} days)",
        range.start.format(RANGE_FORMAT),
        range.end.format(RANGE_FORMAT),
        range.days()
    )
}

#[function_component(OverviewPage)]
pub fn overview_page() -> Html {
    let date_range = use_state(|| DateRange::default_window(Local::now().naive_local()));

    let on_range_change = {
        let date_range = date_range.clone();
        Callback::from(move |selection: RangeSelection| match date_range.apply(&selection) {
            Some(next) => {
                log::debug!("Date range changed to {} - {}", next.start, next.end);
                date_range.set(next);
            }
            None => log::trace!("Ignoring incomplete date range selection: {:?}", selection),
        })
    };

    let grid = bills_grid_props();

    html! {
        <div class="flex flex-col gap-6">
            <h1 class="text-3xl font-bold">{"Financial Overview"}</h1>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Date Range"}</h2>
                    <DateRangePicker range={(*date_range).clone()} on_change={on_range_change} />
                    <p class="text-sm text-base-content/70">{describe_range(&date_range)}</p>
                </div>
            </div>

            <div class="card bg-base-100 shadow w-full">
                <DataGrid<BillRow>
                    rows={grid.rows}
                    columns={grid.columns}
                    page_size_options={grid.page_size_options}
                    checkbox_selection={grid.checkbox_selection}
                    row_click_selection={grid.row_click_selection}
                />
            </div>
        </div>
    }
}

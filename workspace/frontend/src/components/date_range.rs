pub mod calendar;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use calendar::{first_of_month, month_grid, shift_month, WEEKDAY_LABELS};

/// Key of the range edited by the picker
pub const SELECTION_KEY: &str = "selection";

const INPUT_FORMAT: &str = "%Y-%m-%d";

/// A committed time window
#[derive(Debug, Clone, PartialEq)]
pub struct DateRange {
    pub key: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A change reported by the picker. Either bound may be missing while the
/// user is still choosing.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSelection {
    pub key: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl RangeSelection {
    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self {
            key: SELECTION_KEY.to_string(),
            start,
            end,
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }
}

impl DateRange {
    /// Two weeks back to four weeks ahead of `now`
    pub fn default_window(now: NaiveDateTime) -> Self {
        Self {
            key: SELECTION_KEY.to_string(),
            start: now - Duration::weeks(2),
            end: now + Duration::weeks(4),
        }
    }

    /// The range a selection commits to, or `None` when it must be ignored:
    /// a different key, or a missing bound.
    pub fn apply(&self, selection: &RangeSelection) -> Option<Self> {
        if selection.key != self.key {
            return None;
        }
        let (start, end) = (selection.start?, selection.end?);

        Some(Self {
            key: self.key.clone(),
            start: start.min(end),
            end: start.max(end),
        })
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start.date() <= day && day <= self.end.date()
    }

    pub fn days(&self) -> i64 {
        (self.end.date() - self.start.date()).num_days() + 1
    }
}

/// How a calendar cell is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMark {
    /// First click of a selection still waiting for its second bound
    Anchor,
    Endpoint,
    InRange,
    Outside,
}

pub fn mark_day(day: NaiveDate, range: &DateRange, anchor: Option<NaiveDate>) -> DayMark {
    match anchor {
        Some(anchor) if anchor == day => DayMark::Anchor,
        Some(_) => DayMark::Outside,
        None if day == range.start.date() || day == range.end.date() => DayMark::Endpoint,
        None if range.contains(day) => DayMark::InRange,
        None => DayMark::Outside,
    }
}

fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

fn parse_input(value: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(value, INPUT_FORMAT)
        .ok()
        .map(start_of_day)
}

/// The end of a range edited by one of the inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

/// Selection for an edited input. The other bound is kept; an empty or
/// unreadable value leaves the edited bound unset.
pub fn input_change(range: &DateRange, bound: Bound, value: &str) -> RangeSelection {
    let value = parse_input(value);
    let selection = match bound {
        Bound::Start => RangeSelection::new(value, Some(range.end)),
        Bound::End => RangeSelection::new(Some(range.start), value),
    };
    selection.with_key(&range.key)
}

/// New anchor and the selection emitted for a click on `day`.
///
/// Without an anchor the click opens a selection carrying only its start.
/// With one, it closes the selection with both bounds in order.
pub fn day_click(
    anchor: Option<NaiveDate>,
    day: NaiveDate,
    key: &str,
) -> (Option<NaiveDate>, RangeSelection) {
    match anchor {
        None => (
            Some(day),
            RangeSelection::new(Some(start_of_day(day)), None).with_key(key),
        ),
        Some(first) => (
            None,
            RangeSelection::new(
                Some(start_of_day(first.min(day))),
                Some(start_of_day(first.max(day))),
            )
            .with_key(key),
        ),
    }
}

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    pub range: DateRange,
    pub on_change: Callback<RangeSelection>,
}

/// Editable start/end inputs above a month calendar.
///
/// Clicking a day opens a selection at that day; the next click closes it.
/// The committed range does not move until the second click.
#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    let visible_month = use_state(|| first_of_month(props.range.start.date()));
    let anchor = use_state(|| None::<NaiveDate>);

    {
        let visible_month = visible_month.clone();
        use_effect_with(props.range.start.date(), move |start| {
            visible_month.set(first_of_month(*start));
            || ()
        });
    }

    let on_input = |bound: Bound| {
        let on_change = props.on_change.clone();
        let range = props.range.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input_change(&range, bound, &input.value()));
        })
    };

    let change_month = |delta: i32| {
        let visible_month = visible_month.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(month) = shift_month(*visible_month, delta) {
                visible_month.set(month);
            }
        })
    };

    let on_day_click = {
        let on_change = props.on_change.clone();
        let anchor = anchor.clone();
        let key = props.range.key.clone();
        Callback::from(move |day: NaiveDate| {
            let (next_anchor, selection) = day_click(*anchor, day, &key);
            anchor.set(next_anchor);
            on_change.emit(selection);
        })
    };

    let month = *visible_month;

    html! {
        <div class="flex flex-col gap-4 max-w-md">
            <div class="flex gap-2">
                <label class="form-control w-full">
                    <span class="label-text">{"Start"}</span>
                    <input
                        type="date"
                        class="input input-bordered input-sm"
                        value={props.range.start.format(INPUT_FORMAT).to_string()}
                        onchange={on_input(Bound::Start)}
                    />
                </label>
                <label class="form-control w-full">
                    <span class="label-text">{"End"}</span>
                    <input
                        type="date"
                        class="input input-bordered input-sm"
                        value={props.range.end.format(INPUT_FORMAT).to_string()}
                        onchange={on_input(Bound::End)}
                    />
                </label>
            </div>

            <div class="flex items-center justify-between">
                <button class="btn btn-ghost btn-sm btn-circle" onclick={change_month(-1)}>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <span class="font-semibold">{month.format("%B %Y").to_string()}</span>
                <button class="btn btn-ghost btn-sm btn-circle" onclick={change_month(1)}>
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>

            <table class="table table-xs text-center">
                <thead>
                    <tr>
                        { for WEEKDAY_LABELS.iter().map(|label| html! { <th>{*label}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for month_grid(month).into_iter().map(|week| html! {
                        <tr>
                            { for week.into_iter().map(|cell| match cell {
                                Some(day) => {
                                    let onclick = {
                                        let on_day_click = on_day_click.clone();
                                        Callback::from(move |_: MouseEvent| on_day_click.emit(day))
                                    };
                                    let class = match mark_day(day, &props.range, *anchor) {
                                        DayMark::Anchor => "btn-secondary",
                                        DayMark::Endpoint => "btn-primary",
                                        DayMark::InRange => "bg-primary/20",
                                        DayMark::Outside => "btn-ghost",
                                    };
                                    html! {
                                        <td class="p-0">
                                            <button class={classes!("btn", "btn-xs", "w-full", class)} onclick={onclick}>
                                                {day.day()}
                                            </button>
                                        </td>
                                    }
                                }
                                None => html! { <td></td> },
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

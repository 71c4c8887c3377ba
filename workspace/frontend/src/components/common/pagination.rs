use web_sys::HtmlSelectElement;
use yew::prelude::*;

const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// 1-based
    pub current_page: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub on_page_change: Callback<usize>,
    #[prop_or_default]
    pub page_size_options: Vec<usize>,
    #[prop_or_default]
    pub on_page_size_change: Option<Callback<usize>>,
}

/// Page numbers to show; 0 stands for an ellipsis.
pub fn visible_pages(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).collect();
    }

    let mut pages = vec![1];
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);

    if start > 2 {
        pages.push(0);
    }
    pages.extend(start..=end);
    if end < total_pages - 1 {
        pages.push(0);
    }
    pages.push(total_pages);
    pages
}

/// "first-last of total" for the rows shown on `page`
pub fn range_label(page: usize, items_per_page: usize, total_items: usize) -> String {
    if total_items == 0 {
        return "0 of 0".to_string();
    }
    let first = (page - 1) * items_per_page + 1;
    let last = (page * items_per_page).min(total_items);
    format!("{}-{} of {}", first, last, total_items)
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let items_per_page = props.items_per_page.max(1);
    let total_pages = props.total_items.div_ceil(items_per_page).max(1);
    let current = props.current_page.clamp(1, total_pages);

    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if current > 1 {
                on_page_change.emit(current - 1);
            }
        })
    };

    let on_next = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if current < total_pages {
                on_page_change.emit(current + 1);
            }
        })
    };

    let page_size_select = match &props.on_page_size_change {
        Some(on_page_size_change) if !props.page_size_options.is_empty() => {
            let on_change = {
                let on_page_size_change = on_page_size_change.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    if let Ok(size) = select.value().parse::<usize>() {
                        on_page_size_change.emit(size);
                    }
                })
            };
            html! {
                <label class="flex items-center gap-2 text-sm">
                    {"Rows per page:"}
                    <select class="select select-bordered select-xs" onchange={on_change}>
                        { for props.page_size_options.iter().map(|&size| html! {
                            <option value={size.to_string()} selected={size == items_per_page}>{size}</option>
                        }) }
                    </select>
                </label>
            }
        }
        _ => html! {},
    };

    html! {
        <div class="flex justify-end items-center gap-2 my-2">
            {page_size_select}

            <div class="ml-4 text-sm text-base-content/70">
                {range_label(current, items_per_page, props.total_items)}
            </div>

            <button
                class="btn btn-sm btn-ghost"
                disabled={current <= 1}
                onclick={on_previous}
            >
                <i class="fas fa-chevron-left"></i>
            </button>

            if total_pages > 1 {
                {for visible_pages(current, total_pages).into_iter().map(|page| {
                    if page == 0 {
                        html! { <span class="px-2">{"..."}</span> }
                    } else {
                        let on_click = {
                            let on_page_change = props.on_page_change.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_page_change.emit(page);
                            })
                        };

                        html! {
                            <button
                                class={classes!("btn", "btn-sm", (page == current).then_some("btn-primary"))}
                                onclick={on_click}
                            >
                                {page}
                            </button>
                        }
                    }
                })}
            }

            <button
                class="btn btn-sm btn-ghost"
                disabled={current >= total_pages}
                onclick={on_next}
            >
                <i class="fas fa-chevron-right"></i>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_pages_shows_all_when_few() {
        assert_eq!(visible_pages(1, 1), vec![1]);
        assert_eq!(visible_pages(3, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_visible_pages_elides_distant_pages() {
        assert_eq!(visible_pages(1, 10), vec![1, 2, 0, 10]);
        assert_eq!(visible_pages(5, 10), vec![1, 0, 4, 5, 6, 0, 10]);
        assert_eq!(visible_pages(10, 10), vec![1, 0, 9, 10]);
    }

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(1, 5, 2), "1-2 of 2");
        assert_eq!(range_label(2, 5, 12), "6-10 of 12");
        assert_eq!(range_label(3, 5, 12), "11-12 of 12");
        assert_eq!(range_label(1, 5, 0), "0 of 0");
    }
}

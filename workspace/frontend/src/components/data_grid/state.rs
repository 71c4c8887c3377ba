use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::fmt;

/// A sortable cell. Values of different kinds order by kind first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum CellValue {
    Empty,
    Integer(i64),
    Decimal(Decimal),
    Date(NaiveDate),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Integer(value) => write!(f, "{}", value),
            CellValue::Decimal(value) => write!(f, "{:.2}", value),
            CellValue::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            CellValue::Text(value) => f.write_str(value),
        }
    }
}

/// A row the grid can display
pub trait GridRecord {
    /// Unique within the displayed set
    fn id(&self) -> u32;

    fn cell(&self, field: &str) -> CellValue;
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridColumn {
    pub field: &'static str,
    pub header_name: &'static str,
    pub width: u32,
    pub sortable: bool,
}

impl GridColumn {
    pub const fn new(field: &'static str, header_name: &'static str, width: u32) -> Self {
        Self {
            field,
            header_name,
            width,
            sortable: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortModel {
    pub field: &'static str,
    pub direction: SortDirection,
}

/// Sort, selection and paging of one grid instance
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    pub sort: Option<SortModel>,
    pub selected: BTreeSet<u32>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl GridState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: None,
            selected: BTreeSet::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Cycles the column through ascending, descending and unsorted
    pub fn toggle_sort(&self, field: &'static str) -> Self {
        let sort = match &self.sort {
            Some(sort) if sort.field == field => match sort.direction {
                SortDirection::Ascending => Some(SortModel {
                    field,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortModel {
                field,
                direction: SortDirection::Ascending,
            }),
        };
        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn toggle_row(&self, id: u32) -> Self {
        let mut selected = self.selected.clone();
        if !selected.remove(&id) {
            selected.insert(id);
        }
        Self {
            selected,
            ..self.clone()
        }
    }

    /// Selects every id, or clears them all when every one is already selected
    pub fn toggle_all(&self, ids: &[u32]) -> Self {
        let mut selected = self.selected.clone();
        if self.all_selected(ids) {
            for id in ids {
                selected.remove(id);
            }
        } else {
            selected.extend(ids.iter().copied());
        }
        Self {
            selected,
            ..self.clone()
        }
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    pub fn all_selected(&self, ids: &[u32]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.selected.contains(id))
    }

    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size).max(1)
    }

    pub fn set_page(&self, page: usize, total_rows: usize) -> Self {
        Self {
            page: page.clamp(1, self.total_pages(total_rows)),
            ..self.clone()
        }
    }

    pub fn set_page_size(&self, page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            ..self.clone()
        }
    }

    /// Ids of the rows on the current page
    pub fn visible_ids<R: GridRecord>(&self, rows: &[R]) -> Vec<u32> {
        self.view(rows).into_iter().map(GridRecord::id).collect()
    }

    /// Rows of the current page, in sort order
    pub fn view<'a, R: GridRecord>(&self, rows: &'a [R]) -> Vec<&'a R> {
        let mut ordered: Vec<&R> = rows.iter().collect();

        if let Some(sort) = &self.sort {
            ordered.sort_by(|a, b| {
                let ordering = a.cell(sort.field).cmp(&b.cell(sort.field));
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let page = self.page.min(self.total_pages(rows.len()));
        ordered
            .into_iter()
            .skip((page - 1) * self.page_size)
            .take(self.page_size)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        amount: i64,
    }

    impl GridRecord for Row {
        fn id(&self) -> u32 {
            self.id
        }

        fn cell(&self, field: &str) -> CellValue {
            match field {
                "id" => CellValue::Integer(i64::from(self.id)),
                "name" => CellValue::Text(self.name.to_string()),
                "amount" => CellValue::Integer(self.amount),
                _ => CellValue::Empty,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Rent", amount: 1200 },
            Row { id: 2, name: "Electric", amount: 150 },
            Row { id: 3, name: "Water", amount: 40 },
            Row { id: 4, name: "Internet", amount: 60 },
        ]
    }

    fn ids(view: Vec<&Row>) -> Vec<u32> {
        view.into_iter().map(|row| row.id).collect()
    }

    #[test]
    fn test_sort_cycles_through_directions() {
        let state = GridState::new(10);

        let state = state.toggle_sort("amount");
        assert_eq!(ids(state.view(&rows())), vec![3, 4, 2, 1]);

        let state = state.toggle_sort("amount");
        assert_eq!(ids(state.view(&rows())), vec![1, 2, 4, 3]);

        let state = state.toggle_sort("amount");
        assert_eq!(state.sort, None);
        assert_eq!(ids(state.view(&rows())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sorting_another_column_restarts_ascending() {
        let state = GridState::new(10).toggle_sort("amount").toggle_sort("amount");

        let state = state.toggle_sort("name");

        assert_eq!(
            state.sort,
            Some(SortModel { field: "name", direction: SortDirection::Ascending })
        );
        assert_eq!(ids(state.view(&rows())), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_toggle_row_selection() {
        let state = GridState::new(5).toggle_row(2);
        assert!(state.is_selected(2));
        assert!(!state.is_selected(1));

        let state = state.toggle_row(2);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn test_toggle_all() {
        let all = [1, 2, 3, 4];

        let state = GridState::new(5).toggle_row(3).toggle_all(&all);
        assert!(state.all_selected(&all));

        let state = state.toggle_all(&all);
        assert!(state.selected.is_empty());
        assert!(!state.all_selected(&[]));
    }

    #[test]
    fn test_toggle_all_only_touches_current_page() {
        let rows = rows();
        let state = GridState::new(3);
        assert_eq!(state.visible_ids(&rows), vec![1, 2, 3]);

        let state = state.toggle_all(&state.visible_ids(&rows));
        assert_eq!(state.selected, BTreeSet::from([1, 2, 3]));

        let state = state.set_page(2, rows.len());
        let visible = state.visible_ids(&rows);
        assert_eq!(visible, vec![4]);
        assert!(!state.all_selected(&visible));

        let state = state.toggle_all(&visible);
        assert_eq!(state.selected, BTreeSet::from([1, 2, 3, 4]));

        let state = state.toggle_all(&state.visible_ids(&rows));
        assert_eq!(state.selected, BTreeSet::from([1, 2, 3]));
    }

    #[test]
    fn test_paging_is_clamped() {
        let rows = rows();
        let state = GridState::new(3);
        assert_eq!(state.total_pages(rows.len()), 2);
        assert_eq!(ids(state.view(&rows)), vec![1, 2, 3]);

        let state = state.set_page(2, rows.len());
        assert_eq!(ids(state.view(&rows)), vec![4]);

        assert_eq!(state.set_page(9, rows.len()).page, 2);
        assert_eq!(state.set_page(0, rows.len()).page, 1);
    }

    #[test]
    fn test_page_size_change_returns_to_first_page() {
        let rows = rows();
        let state = GridState::new(3).set_page(2, rows.len()).set_page_size(10);

        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages(rows.len()), 1);
        assert_eq!(state.total_pages(0), 1);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Decimal(Decimal::from(1200)).to_string(), "1200.00");
        assert_eq!(
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()).to_string(),
            "2024-03-05"
        );
        assert_eq!(CellValue::Empty.to_string(), "");
    }
}

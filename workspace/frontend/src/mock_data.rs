//! Placeholder rows for the overview grid until bills come from the API.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::components::data_grid::{CellValue, GridColumn, GridRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub id: u32,
    pub name: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: String,
}

impl GridRecord for BillRow {
    fn id(&self) -> u32 {
        self.id
    }

    fn cell(&self, field: &str) -> CellValue {
        match field {
            "id" => CellValue::Integer(i64::from(self.id)),
            "name" => CellValue::Text(self.name.clone()),
            "amount" => CellValue::Decimal(self.amount),
            "dueDate" => CellValue::Date(self.due_date),
            "status" => CellValue::Text(self.status.clone()),
            _ => CellValue::Empty,
        }
    }
}

pub fn get_mock_bill_columns() -> Vec<GridColumn> {
    vec![
        GridColumn::new("id", "ID", 90),
        GridColumn::new("name", "Name", 200),
        GridColumn::new("amount", "Amount", 130),
        GridColumn::new("dueDate", "Due Date", 130),
        GridColumn::new("status", "Status", 130),
    ]
}

fn bill(id: u32, name: &str, amount: i64, due_date: (i32, u32, u32), status: &str) -> BillRow {
    let (year, month, day) = due_date;
    BillRow {
        id,
        name: name.to_string(),
        amount: Decimal::from(amount),
        due_date: NaiveDate::from_ymd_opt(year, month, day).expect("mock due dates are valid"),
        status: status.to_string(),
    }
}

pub fn get_mock_bills() -> Vec<BillRow> {
    vec![
        bill(1, "Rent", 1200, (2024, 3, 1), "Upcoming"),
        bill(2, "Electric", 150, (2024, 3, 5), "Upcoming"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mock_bills() {
        let bills = get_mock_bills();

        assert_eq!(bills.len(), 2);
        assert_eq!(bills[0].name, "Rent");
        assert_eq!(bills[0].amount, Decimal::from(1200));
        assert_eq!(bills[0].due_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(bills[0].status, "Upcoming");
        assert_eq!(bills[1].name, "Electric");
        assert_eq!(bills[1].amount, Decimal::from(150));
        assert_eq!(bills[1].due_date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(bills[1].status, "Upcoming");

        let ids: HashSet<u32> = bills.iter().map(GridRecord::id).collect();
        assert_eq!(ids.len(), bills.len());
    }

    #[test]
    fn test_every_column_has_a_value() {
        let bills = get_mock_bills();
        for column in get_mock_bill_columns() {
            assert_ne!(bills[0].cell(column.field), CellValue::Empty, "column {}", column.field);
        }
    }

    #[test]
    fn test_column_layout() {
        let columns = get_mock_bill_columns();
        let headers: Vec<_> = columns.iter().map(|c| (c.header_name, c.width)).collect();
        assert_eq!(
            headers,
            vec![("ID", 90), ("Name", 200), ("Amount", 130), ("Due Date", 130), ("Status", 130)]
        );
    }
}

use serde::Deserialize;

/// One row of the `employee` table, in column order.
#[derive(sqlx::FromRow, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub emp_id: String,
    pub first_name: String,
    pub last_name: String,
    pub primary_skill: String,
    pub location: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Deserialize, Debug)]
pub struct FetchEmployee {
    pub emp_id: String,
}

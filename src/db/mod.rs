use async_trait::async_trait;
use log::{error, info};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::DatabaseSettings;
use crate::errors::AppError;
use crate::models::employee::Employee;

const INSERT_EMPLOYEE: &str = "INSERT INTO employee VALUES (?, ?, ?, ?, ?)";
// emp_id comes back as text whether the column is numeric or character.
const SELECT_EMPLOYEE: &str = "SELECT CAST(emp_id AS CHAR) AS emp_id, first_name, last_name, \
     primary_skill, location FROM employee WHERE emp_id = ?";

/// Storage for employee records.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn insert_employee(&self, employee: &Employee) -> Result<(), AppError>;

    /// Point lookup; `Ok(None)` when no row matches.
    async fn find_employee(&self, emp_id: &str) -> Result<Option<Employee>, AppError>;
}

/// The single MySQL connection opened at startup. Requests take turns on it;
/// a dropped connection is not re-established.
pub struct MySqlStore {
    conn: Mutex<MySqlConnection>,
}

impl MySqlStore {
    pub fn new(conn: MySqlConnection) -> Self {
        MySqlStore {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl EmployeeStore for MySqlStore {
    async fn insert_employee(&self, employee: &Employee) -> Result<(), AppError> {
        let mut conn = self.conn.lock().await;
        sqlx::query(INSERT_EMPLOYEE)
            .bind(&employee.emp_id)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.primary_skill)
            .bind(&employee.location)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn find_employee(&self, emp_id: &str) -> Result<Option<Employee>, AppError> {
        let mut conn = self.conn.lock().await;
        let employee = sqlx::query_as::<_, Employee>(SELECT_EMPLOYEE)
            .bind(emp_id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(employee)
    }
}

/// Makes the one startup connection attempt. Failure is logged and yields
/// `None`; the pages that do not touch the database keep working.
pub async fn connect(settings: &DatabaseSettings) -> Option<Arc<dyn EmployeeStore>> {
    let options = MySqlConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(&settings.password)
        .database(&settings.name);

    match MySqlConnection::connect_with(&options).await {
        Ok(conn) => {
            info!(
                "Connected to MySQL at {}:{}/{}",
                settings.host, settings.port, settings.name
            );
            Some(Arc::new(MySqlStore::new(conn)))
        }
        Err(err) => {
            error!("ERROR: Could not connect to MySQL database: {}", err);
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    fn employee(id: &str) -> Employee {
        Employee {
            emp_id: id.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            primary_skill: "Analysis".to_string(),
            location: "London".to_string(),
        }
    }

    #[actix_web::test]
    async fn unreachable_database_yields_no_store() {
        let settings = DatabaseSettings {
            host: "127.0.0.1".to_string(),
            port: 1,
            user: "root".to_string(),
            password: "password".to_string(),
            name: "employees".to_string(),
        };
        assert!(connect(&settings).await.is_none());
    }

    #[actix_web::test]
    async fn memory_store_round_trips() {
        let store = MemoryStore::default();
        store.insert_employee(&employee("7")).await.unwrap();
        assert_eq!(store.find_employee("7").await.unwrap(), Some(employee("7")));
        assert_eq!(store.find_employee("8").await.unwrap(), None);
        assert!(store.insert_employee(&employee("7")).await.is_err());
    }

    #[test]
    fn lookup_reads_emp_id_as_text() {
        assert!(SELECT_EMPLOYEE.starts_with("SELECT CAST(emp_id AS CHAR) AS emp_id, first_name,"));
        assert!(SELECT_EMPLOYEE.ends_with("FROM employee WHERE emp_id = ?"));
    }

    // Needs a reachable MySQL configured through the DB* variables:
    // cargo test -- --ignored
    #[actix_web::test]
    #[ignore]
    async fn numeric_emp_id_column_round_trips() {
        let settings = crate::config::Config::from_env().database;
        let options = MySqlConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&settings.user)
            .password(&settings.password)
            .database(&settings.name);
        let mut conn = MySqlConnection::connect_with(&options).await.unwrap();
        // Shadows any real table for this connection only.
        sqlx::query(
            "CREATE TEMPORARY TABLE employee (emp_id INT PRIMARY KEY, first_name VARCHAR(64), \
             last_name VARCHAR(64), primary_skill VARCHAR(64), location VARCHAR(64))",
        )
        .execute(&mut conn)
        .await
        .unwrap();

        let store = MySqlStore::new(conn);
        store.insert_employee(&employee("42")).await.unwrap();

        assert_eq!(store.find_employee("42").await.unwrap(), Some(employee("42")));
        assert_eq!(store.find_employee("43").await.unwrap(), None);
    }
}

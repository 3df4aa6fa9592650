//! Employee Service
//!
//! Validation and derived views on top of the upstream client. The full
//! employee list is cached under a single key and dropped whenever this
//! gateway creates or deletes an employee.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use super::aggregate::{
    filter_by_name, highest_salary, top_earner_names, validate_search, TOP_EARNERS_LIMIT,
};
use crate::cache::{CachePolicy, CacheStats, CacheStore};
use crate::client::EmployeeApi;
use crate::error::{ApiError, Result};
use crate::models::{CreateEmployeeInput, Employee};

/// Cache key holding the full employee list
pub const ALL_EMPLOYEES_KEY: &str = "all";

pub struct EmployeeService {
    client: Arc<dyn EmployeeApi>,
    cache: CacheStore<Vec<Employee>>,
}

impl EmployeeService {
    pub fn new(client: Arc<dyn EmployeeApi>, policy: CachePolicy) -> Self {
        Self {
            client,
            cache: CacheStore::new(policy),
        }
    }

    // == Get All ==
    /// Full employee list, served from cache while fresh.
    pub async fn get_all_employees(&self) -> Result<Vec<Employee>> {
        self.cache
            .get_or_refresh(ALL_EMPLOYEES_KEY, || async {
                info!("Fetching employees from upstream (cache miss)");
                let employees = self.client.list_employees().await?.unwrap_or_default();
                Ok::<_, ApiError>(employees)
            })
            .await
    }

    // == Search ==
    /// Employees whose name contains `search`, case-insensitively.
    pub async fn get_employees_by_name_search(&self, search: &str) -> Result<Vec<Employee>> {
        let needle = validate_search(search)?;
        let employees = self.get_all_employees().await?;
        Ok(filter_by_name(employees, needle))
    }

    // == Get By Id ==
    /// Looks up one employee. A malformed id is simply not found.
    pub async fn get_employee_by_id(&self, id: &str) -> Result<Option<Employee>> {
        let id = match Uuid::parse_str(id) {
            Ok(id) => id,
            Err(_) => {
                debug!("Rejecting malformed employee id {:?}", id);
                return Ok(None);
            }
        };

        Ok(self.client.get_employee(&id).await?)
    }

    pub async fn get_highest_salary_of_employees(&self) -> Result<u64> {
        let employees = self.get_all_employees().await?;
        Ok(highest_salary(&employees))
    }

    pub async fn get_top_ten_highest_earning_employee_names(&self) -> Result<Vec<String>> {
        let employees = self.get_all_employees().await?;
        Ok(top_earner_names(&employees, TOP_EARNERS_LIMIT))
    }

    // == Create ==
    pub async fn create_employee(&self, input: CreateEmployeeInput) -> Result<Employee> {
        if let Some(message) = input.validate() {
            return Err(ApiError::InvalidInput(message));
        }

        let created = self
            .client
            .create_employee(&input)
            .await?
            .ok_or_else(|| ApiError::Unexpected("Employee creation failed".to_string()))?;

        self.cache.invalidate(ALL_EMPLOYEES_KEY).await;
        info!("Employee created successfully: {}", created.name);
        Ok(created)
    }

    // == Delete ==
    /// Deletes by id and returns the deleted employee's name.
    ///
    /// The upstream deletes by name, so the id is resolved first; nothing is
    /// deleted when that lookup finds no one.
    pub async fn delete_employee_by_id(&self, id: &str) -> Result<String> {
        let employee = self
            .get_employee_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Employee {} not found", id)))?;

        match self.client.delete_employee(&employee.name).await? {
            Some(true) => {
                self.cache.invalidate(ALL_EMPLOYEES_KEY).await;
                info!("Employee {} deleted successfully", employee.name);
                Ok(employee.name)
            }
            _ => Err(ApiError::Unexpected(format!(
                "Failed to delete employee: {}",
                employee.name
            ))),
        }
    }

    // == Cache Admin ==
    pub async fn invalidate_cache(&self) {
        self.cache.invalidate_all().await;
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClientError, ClientResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory stand-in for the upstream service.
    #[derive(Default)]
    struct FakeApi {
        employees: Mutex<Vec<Employee>>,
        list_calls: AtomicUsize,
        get_calls: AtomicUsize,
        deleted: Mutex<Vec<String>>,
        delete_result: Option<bool>,
        fail_list: bool,
    }

    impl FakeApi {
        fn with(employees: Vec<Employee>) -> Self {
            Self {
                employees: Mutex::new(employees),
                delete_result: Some(true),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl EmployeeApi for FakeApi {
        async fn list_employees(&self) -> ClientResult<Option<Vec<Employee>>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_list {
                return Err(ClientError::RateLimited { attempts: 4 });
            }
            Ok(Some(self.employees.lock().unwrap().clone()))
        }

        async fn get_employee(&self, id: &Uuid) -> ClientResult<Option<Employee>> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .employees
                .lock()
                .unwrap()
                .iter()
                .find(|e| &e.id == id)
                .cloned())
        }

        async fn create_employee(
            &self,
            input: &CreateEmployeeInput,
        ) -> ClientResult<Option<Employee>> {
            let created = Employee {
                id: Uuid::new_v4(),
                name: input.name.clone(),
                salary: input.salary.unwrap_or_default() as u64,
                age: input.age.unwrap_or_default() as u32,
                title: input.title.clone(),
                email: input.email.clone(),
            };
            self.employees.lock().unwrap().push(created.clone());
            Ok(Some(created))
        }

        async fn delete_employee(&self, name: &str) -> ClientResult<Option<bool>> {
            self.deleted.lock().unwrap().push(name.to_string());
            Ok(self.delete_result)
        }
    }

    fn employee(name: &str, salary: u64) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: name.to_string(),
            salary,
            age: 30,
            title: "Developer".to_string(),
            email: "dev@company.com".to_string(),
        }
    }

    fn sample() -> Vec<Employee> {
        vec![
            employee("Employee X", 75000),
            employee("Employee Y", 85000),
            employee("Manager Z", 95000),
        ]
    }

    fn service(api: Arc<FakeApi>) -> EmployeeService {
        EmployeeService::new(api, CachePolicy::Manual)
    }

    fn valid_input() -> CreateEmployeeInput {
        CreateEmployeeInput {
            name: "New Hire".to_string(),
            salary: Some(50000),
            age: Some(22),
            title: "Intern".to_string(),
            email: "new@company.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_all_employees_is_cached() {
        let api = Arc::new(FakeApi::with(sample()));
        let service = service(api.clone());

        assert_eq!(service.get_all_employees().await.unwrap().len(), 3);
        assert_eq!(service.get_all_employees().await.unwrap().len(), 3);
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_get_all_employees_upstream_failure() {
        let api = Arc::new(FakeApi {
            fail_list: true,
            ..Default::default()
        });
        let service = service(api);

        let result = service.get_all_employees().await;
        assert!(matches!(result, Err(ApiError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_search_filters_by_name() {
        let service = service(Arc::new(FakeApi::with(sample())));

        let found = service.get_employees_by_name_search("employee").await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_search_rejects_invalid_without_upstream_call() {
        let api = Arc::new(FakeApi::with(sample()));
        let service = service(api.clone());

        let result = service.get_employees_by_name_search("test@123").await;
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_get_by_id_found() {
        let employees = sample();
        let id = employees[1].id.to_string();
        let service = service(Arc::new(FakeApi::with(employees)));

        let found = service.get_employee_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.name, "Employee Y");
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_uuid_is_none() {
        let service = service(Arc::new(FakeApi::with(sample())));

        let found = service
            .get_employee_by_id(&Uuid::new_v4().to_string())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_malformed_skips_upstream() {
        let api = Arc::new(FakeApi::with(sample()));
        let service = service(api.clone());

        assert!(service.get_employee_by_id("not-a-uuid").await.unwrap().is_none());
        assert_eq!(api.get_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_highest_salary_and_top_ten() {
        let service = service(Arc::new(FakeApi::with(sample())));

        assert_eq!(service.get_highest_salary_of_employees().await.unwrap(), 95000);
        assert_eq!(
            service
                .get_top_ten_highest_earning_employee_names()
                .await
                .unwrap(),
            vec!["Manager Z", "Employee Y", "Employee X"]
        );
    }

    #[tokio::test]
    async fn test_highest_salary_empty() {
        let service = service(Arc::new(FakeApi::with(vec![])));
        assert_eq!(service.get_highest_salary_of_employees().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_employee_invalidates_cache() {
        let api = Arc::new(FakeApi::with(sample()));
        let service = service(api.clone());

        service.get_all_employees().await.unwrap();
        let created = service.create_employee(valid_input()).await.unwrap();
        assert_eq!(created.name, "New Hire");

        assert_eq!(service.get_all_employees().await.unwrap().len(), 4);
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_create_employee_invalid_input() {
        let api = Arc::new(FakeApi::with(sample()));
        let service = service(api.clone());

        let input = CreateEmployeeInput {
            age: Some(10),
            ..valid_input()
        };
        let result = service.create_employee(input).await;
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
        assert_eq!(api.employees.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_delete_resolves_name_first() {
        let employees = sample();
        let id = employees[0].id.to_string();
        let api = Arc::new(FakeApi::with(employees));
        let service = service(api.clone());

        let name = service.delete_employee_by_id(&id).await.unwrap();
        assert_eq!(name, "Employee X");
        assert_eq!(*api.deleted.lock().unwrap(), vec!["Employee X".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_unknown_issues_no_delete() {
        let api = Arc::new(FakeApi::with(sample()));
        let service = service(api.clone());

        let result = service
            .delete_employee_by_id(&Uuid::new_v4().to_string())
            .await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));

        let result = service.delete_employee_by_id("garbage").await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));

        assert!(api.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_not_confirmed_is_unexpected() {
        let employees = sample();
        let id = employees[2].id.to_string();
        let api = Arc::new(FakeApi {
            delete_result: Some(false),
            ..FakeApi::with(employees)
        });
        let service = service(api);

        let result = service.delete_employee_by_id(&id).await;
        assert!(matches!(result, Err(ApiError::Unexpected(_))));
    }

    #[tokio::test]
    async fn test_invalidate_cache_and_stats() {
        let api = Arc::new(FakeApi::with(sample()));
        let service = service(api.clone());

        service.get_all_employees().await.unwrap();
        service.get_all_employees().await.unwrap();
        service.invalidate_cache().await;
        service.get_all_employees().await.unwrap();

        let stats = service.cache_stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.refreshes, 2);
        assert_eq!(stats.invalidations, 1);
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);
    }
}

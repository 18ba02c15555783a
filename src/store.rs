// SPDX-License-Identifier: PMPL-1.0-or-later
//! Read-only in-memory data store for the directory collections

use async_graphql::ID;

use crate::models::{Company, Employee, Technology};

/// Immutable data-access object over the three directory collections.
///
/// Constructed once at startup and attached to the GraphQL schema as context
/// data. Every lookup is a linear scan; collections are small and fixed, so
/// no indexing is kept. On duplicate identifiers the first record in
/// declaration order wins.
#[derive(Debug, Clone)]
pub struct DataStore {
    employees: Vec<Employee>,
    companies: Vec<Company>,
    technologies: Vec<Technology>,
}

impl DataStore {
    /// Build the store from the fixed sample data.
    ///
    /// Identifiers are canonical strings; reference lists are normalized to
    /// the same form at ingestion so lookups never compare across types.
    pub fn seed() -> Self {
        let technologies = vec![
            Technology {
                id: ID("T1001".to_string()),
                name: "Angular".to_string(),
                description: Some("The modern web developer's platform".to_string()),
            },
            Technology {
                id: ID("T1002".to_string()),
                name: "React".to_string(),
                description: Some(
                    "A JavaScript library for building user interfaces".to_string(),
                ),
            },
            Technology {
                id: ID("T1003".to_string()),
                name: "Vue".to_string(),
                description: Some("The Progressive JavaScript Framework".to_string()),
            },
        ];

        let employees = vec![
            Employee {
                id: ID("E1001".to_string()),
                first_name: "Arvindchand".to_string(),
                last_name: Some("Lairenjam".to_string()),
                job_level: Some(4),
                company_id: Some(ID("C1001".to_string())),
                technology_ids: Some(vec![ID("T1001".to_string()), ID("T1002".to_string())]),
            },
            Employee {
                id: ID("E1002".to_string()),
                first_name: "Vishal".to_string(),
                last_name: Some("Nag".to_string()),
                job_level: Some(3),
                company_id: Some(ID("C1001".to_string())),
                technology_ids: Some(vec![ID("T1002".to_string()), ID("T1003".to_string())]),
            },
        ];

        let companies = vec![
            Company {
                id: ID("C1001".to_string()),
                name: "Infosys Ltd".to_string(),
            },
            Company {
                id: ID("C1002".to_string()),
                name: "Theorem".to_string(),
            },
            Company {
                id: ID("C1003".to_string()),
                name: "Lasren & Turbo".to_string(),
            },
        ];

        Self {
            employees,
            companies,
            technologies,
        }
    }

    /// All employees, declaration order preserved
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// All companies, declaration order preserved
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// All technologies, declaration order preserved
    pub fn technologies(&self) -> &[Technology] {
        &self.technologies
    }

    /// Look up an employee by identifier. Absence is `None`, not an error.
    pub fn employee_by_id(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id.as_str() == id)
    }

    /// Look up a company by identifier
    pub fn company_by_id(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.id.as_str() == id)
    }

    /// Look up a technology by identifier
    pub fn technology_by_id(&self, id: &str) -> Option<&Technology> {
        self.technologies.iter().find(|t| t.id.as_str() == id)
    }

    /// All employees referencing the given company. Empty when none match.
    pub fn employees_for_company(&self, company_id: &str) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| {
                e.company_id
                    .as_ref()
                    .is_some_and(|c| c.as_str() == company_id)
            })
            .collect()
    }

    /// Resolve an employee's technology references into full records.
    /// Dangling references are skipped silently.
    pub fn technologies_for_employee(&self, employee: &Employee) -> Vec<&Technology> {
        employee
            .technology_ids
            .iter()
            .flatten()
            .filter_map(|id| self.technology_by_id(id.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collections_keep_declaration_order_and_size() {
        let store = DataStore::seed();
        assert_eq!(store.employees().len(), 2);
        assert_eq!(store.companies().len(), 3);
        assert_eq!(store.technologies().len(), 3);
        assert_eq!(store.employees()[0].id.as_str(), "E1001");
        assert_eq!(store.companies()[2].name, "Lasren & Turbo");
    }

    #[test]
    fn lookup_returns_matching_record_or_absence() {
        let store = DataStore::seed();
        for employee in store.employees() {
            let found = store.employee_by_id(employee.id.as_str()).unwrap();
            assert_eq!(found.id, employee.id);
        }
        assert!(store.employee_by_id("E9999").is_none());
        assert!(store.company_by_id("").is_none());
    }

    #[test]
    fn duplicate_identifiers_resolve_to_first_declared() {
        let mut store = DataStore::seed();
        let mut shadow = store.employees[0].clone();
        shadow.first_name = "Shadow".to_string();
        store.employees.push(shadow);

        let found = store.employee_by_id("E1001").unwrap();
        assert_eq!(found.first_name, "Arvindchand");
    }

    #[test]
    fn company_filter_partitions_the_employee_collection() {
        let store = DataStore::seed();
        let assigned: usize = store
            .companies()
            .iter()
            .map(|c| store.employees_for_company(c.id.as_str()).len())
            .sum();
        let unassigned = store
            .employees()
            .iter()
            .filter(|e| e.company_id.is_none())
            .count();
        assert_eq!(assigned + unassigned, store.employees().len());

        assert_eq!(store.employees_for_company("C1001").len(), 2);
        assert!(store.employees_for_company("C1002").is_empty());
    }

    #[test]
    fn dangling_technology_references_are_skipped() {
        let store = DataStore::seed();
        let mut employee = store.employees()[0].clone();
        employee
            .technology_ids
            .as_mut()
            .unwrap()
            .push(ID("T9999".to_string()));

        let resolved = store.technologies_for_employee(&employee);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].name, "Angular");
    }
}

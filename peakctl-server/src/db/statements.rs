//! SQL templates for single-row resource operations
//!
//! Identifiers come from static resource descriptors, never from request
//! input, and are backtick-quoted so columns like `contraseña` need no
//! special casing. Values always travel as `?` parameters.

use crate::models::Scalar;

/// A query template with its ordered parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Scalar>,
}

fn quote(ident: &str) -> String {
    format!("`{}`", ident)
}

fn column_list(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| quote(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `SELECT cols FROM table`
pub fn select_all(table: &str, columns: &[&str]) -> Statement {
    Statement {
        sql: format!("SELECT {} FROM {}", column_list(columns), quote(table)),
        params: Vec::new(),
    }
}

/// `SELECT cols FROM table WHERE identity = ?`
pub fn select_one(table: &str, columns: &[&str], identity: &str, id: &str) -> Statement {
    Statement {
        sql: format!(
            "SELECT {} FROM {} WHERE {} = ?",
            column_list(columns),
            quote(table),
            quote(identity)
        ),
        params: vec![Scalar::from(id)],
    }
}

/// `SELECT identity FROM table WHERE identity = ?`
pub fn exists(table: &str, identity: &str, id: &str) -> Statement {
    select_one(table, &[identity], identity, id)
}

/// `INSERT INTO table (cols) VALUES (?, ...)` for the given pairs.
pub fn insert(table: &str, values: &[(&str, Scalar)]) -> Statement {
    let columns: Vec<&str> = values.iter().map(|(c, _)| *c).collect();
    let placeholders = vec!["?"; values.len()].join(", ");

    Statement {
        sql: format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote(table),
            column_list(&columns),
            placeholders
        ),
        params: values.iter().map(|(_, v)| v.clone()).collect(),
    }
}

/// `UPDATE table SET a = ?, b = ? WHERE identity = ?`
pub fn update(table: &str, identity: &str, id: &str, values: &[(&str, Scalar)]) -> Statement {
    let assignments = values
        .iter()
        .map(|(c, _)| format!("{} = ?", quote(c)))
        .collect::<Vec<_>>()
        .join(", ");

    let mut params: Vec<Scalar> = values.iter().map(|(_, v)| v.clone()).collect();
    params.push(Scalar::from(id));

    Statement {
        sql: format!(
            "UPDATE {} SET {} WHERE {} = ?",
            quote(table),
            assignments,
            quote(identity)
        ),
        params,
    }
}

/// `DELETE FROM table WHERE identity = ?`
pub fn delete(table: &str, identity: &str, id: &str) -> Statement {
    Statement {
        sql: format!("DELETE FROM {} WHERE {} = ?", quote(table), quote(identity)),
        params: vec![Scalar::from(id)],
    }
}

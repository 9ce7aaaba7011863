use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub height: f64,
    pub is_student: bool,
}

impl Person {
    /// Fields are taken verbatim; no range checks on age or height.
    pub fn new(name: impl Into<String>, age: u32, height: f64, is_student: bool) -> Self {
        Self {
            name: name.into(),
            age,
            height,
            is_student,
        }
    }

    /// Single-line introduction with fixed phrasing.
    pub fn introduction(&self) -> String {
        format!(
            "{} is {} years old, {} feet tall, and is a student: {}",
            self.name, self.age, self.height, self.is_student
        )
    }

    /// Prints the introduction line to stdout.
    pub fn introduce(&self) {
        println!("{}", self.introduction());
    }
}

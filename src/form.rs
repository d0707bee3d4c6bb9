//! New-idea submission form.
//!
//! Holds the user's in-progress input and validates it fully client-side
//! before any remote call is attempted. Failed submissions keep the entered
//! values; only a successful submission clears the form.

use crate::commands::MAX_TITLE_LEN;
use crate::errors::FieldError;
use crate::models::{FileRef, NewIdea};

/// The fixed set of idea categories offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ProcessImprovement,
    ProductFeature,
    EmployeeExperience,
    CustomerExperience,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::ProcessImprovement,
        Category::ProductFeature,
        Category::EmployeeExperience,
        Category::CustomerExperience,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ProcessImprovement => "process-improvement",
            Category::ProductFeature => "product-feature",
            Category::EmployeeExperience => "employee-experience",
            Category::CustomerExperience => "customer-experience",
            Category::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "process-improvement" => Some(Category::ProcessImprovement),
            "product-feature" => Some(Category::ProductFeature),
            "employee-experience" => Some(Category::EmployeeExperience),
            "customer-experience" => Some(Category::CustomerExperience),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    /// Label shown in the category dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Category::ProcessImprovement => "Process Improvement",
            Category::ProductFeature => "Product Feature",
            Category::EmployeeExperience => "Employee Experience",
            Category::CustomerExperience => "Customer Experience",
            Category::Other => "Other",
        }
    }
}

/// Lifecycle of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    Submitting,
}

/// In-progress form input plus the field errors from the last submit attempt.
#[derive(Debug, Default)]
pub struct NewIdeaForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub attachments: Vec<FileRef>,
    pub state: FormState,
    errors: Vec<FieldError>,
}

impl NewIdeaForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field errors from the most recent validation, empty when none.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Validate the current input and build the insert payload for `user_id`.
    ///
    /// Runs synchronously and fully client-side; on failure the field errors
    /// are retained for display and no payload is produced.
    pub fn validate(&mut self, user_id: &str) -> Result<NewIdea, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push(FieldError::new("title", "Title is required"));
        } else if title.chars().count() > MAX_TITLE_LEN {
            errors.push(FieldError::new(
                "title",
                "Title must be 100 characters or fewer",
            ));
        }

        if self.description.trim().is_empty() {
            errors.push(FieldError::new("description", "Description is required"));
        }

        let category = self.category.trim();
        if category.is_empty() {
            errors.push(FieldError::new("category", "Category is required"));
        } else if Category::from_str(category).is_none() {
            errors.push(FieldError::new("category", "Select a category from the list"));
        }

        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }

        self.errors.clear();
        Ok(NewIdea {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            category: category.to_string(),
            user_id: user_id.to_string(),
        })
    }

    /// Clear all fields and errors after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

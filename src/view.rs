use crate::errors::ClientError;
use crate::models::{CompletionRequest, Difficulty, Frequency, Level, NewHabit};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Habits,
    Analytics,
}

impl Tab {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "habits" => Some(Self::Habits),
            "analytics" => Some(Self::Analytics),
            _ => None,
        }
    }
}

/// The three ways a user can dismiss the completion modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CloseVia {
    Close,
    Backdrop,
    Escape,
}

impl CloseVia {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "close" => Some(Self::Close),
            "backdrop" => Some(Self::Backdrop),
            "escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CompletionDate,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct HabitForm {
    pub name: String,
    pub description: String,
    pub frequency: String,
    pub motivation_text: String,
    pub difficulty_level: String,
}

impl HabitForm {
    pub fn to_new_habit(&self) -> Result<NewHabit, ClientError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ClientError::validation("Enter a habit name"));
        }

        let frequency = if self.frequency.trim().is_empty() {
            Frequency::default()
        } else {
            Frequency::parse(&self.frequency)
                .ok_or_else(|| ClientError::validation("Unknown frequency"))?
        };
        let difficulty = if self.difficulty_level.trim().is_empty() {
            Difficulty::default()
        } else {
            Difficulty::parse(&self.difficulty_level)
                .ok_or_else(|| ClientError::validation("Unknown difficulty level"))?
        };

        Ok(NewHabit::bad(
            name.to_string(),
            non_empty(&self.description),
            frequency,
            non_empty(&self.motivation_text),
            difficulty,
        ))
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CompletionForm {
    #[serde(default)]
    pub habit_id: String,
    #[serde(default)]
    pub completion_date: String,
    #[serde(default, deserialize_with = "checkbox")]
    pub completed: bool,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub craving_level: String,
    #[serde(default)]
    pub resistance_level: String,
}

impl CompletionForm {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            habit_id: String::new(),
            completion_date: today.format("%Y-%m-%d").to_string(),
            completed: true,
            notes: String::new(),
            craving_level: "0".to_string(),
            resistance_level: "0".to_string(),
        }
    }

    pub fn to_request(&self) -> Result<CompletionRequest, ClientError> {
        let habit_id = self
            .habit_id
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| ClientError::validation("No habit selected"))?;

        let date = self.completion_date.trim();
        if date.is_empty() {
            return Err(ClientError::validation("Choose a date"));
        }
        let completion_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ClientError::validation("Invalid date"))?;

        Ok(CompletionRequest {
            habit_id,
            completion_date,
            completed: self.completed,
            notes: non_empty(&self.notes),
            craving_level: parse_level(&self.craving_level, "Craving level")?,
            resistance_level: parse_level(&self.resistance_level, "Resistance level")?,
        })
    }
}

fn parse_level(raw: &str, label: &str) -> Result<Level, ClientError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Level::default());
    }
    raw.parse::<i64>()
        .ok()
        .and_then(Level::new)
        .ok_or_else(|| ClientError::validation(format!("{label} must be between 0 and {}", Level::MAX)))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// HTML checkboxes are absent when unchecked and carry "on" when checked.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(value.as_deref(), Some("on" | "true" | "1")))
}

/// Tab and modal state of the page plus the two forms it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub active_tab: Tab,
    pub modal_open: bool,
    pub scroll_locked: bool,
    pub focus: Option<Field>,
    pub habit_form: HabitForm,
    pub completion_form: CompletionForm,
}

impl ViewState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            active_tab: Tab::Habits,
            modal_open: false,
            scroll_locked: false,
            focus: None,
            habit_form: HabitForm::default(),
            completion_form: CompletionForm::blank(today),
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn open_modal(&mut self, habit_id: i64) {
        self.completion_form.habit_id = habit_id.to_string();
        self.modal_open = true;
        self.scroll_locked = true;
        self.focus = Some(Field::CompletionDate);
    }

    /// Resets the modal regardless of how it was dismissed. Returns whether it was open.
    pub fn close_modal(&mut self, _via: CloseVia, today: NaiveDate) -> bool {
        let was_open = self.modal_open;
        self.modal_open = false;
        self.scroll_locked = false;
        self.focus = None;
        self.completion_form = CompletionForm::blank(today);
        was_open
    }

    pub fn reset_habit_form(&mut self) {
        self.habit_form = HabitForm::default();
    }
}

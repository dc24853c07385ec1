//! Page snapshots
//!
//! A snapshot is the serialized shape of a rendered roster page: month
//! sections holding students, each with a presented status and a set of
//! action buttons. Snapshots load from JSON or YAML.

use chrono::Month;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use crate::config::LabelSettings;
use crate::error::{RosterError, RosterResult};
use crate::models::{month_key, ActionKind, PaymentStatus, SectionId};

use super::page::Page;

/// Serialization format of a snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Pick the format from a file extension; anything but yaml/yml is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

fn default_actions() -> Vec<ActionKind> {
    vec![ActionKind::Reminder, ActionKind::MarkPaid]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSnapshot {
    pub name: String,

    /// Presented status; absent means the badge carries no status tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,

    #[serde(default = "default_actions")]
    pub actions: Vec<ActionKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSnapshot {
    /// Element key, e.g. `month-3`
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub students: Vec<StudentSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub sections: Vec<SectionSnapshot>,

    /// Students rendered outside any month section
    #[serde(default)]
    pub students: Vec<StudentSnapshot>,
}

impl PageSnapshot {
    /// Parse a snapshot from text in the given format
    pub fn parse_str(contents: &str, format: SnapshotFormat) -> RosterResult<Self> {
        let snapshot = match format {
            SnapshotFormat::Json => serde_json::from_str(contents)?,
            SnapshotFormat::Yaml => serde_yaml::from_str(contents)?,
        };
        Ok(snapshot)
    }

    /// Read a snapshot file, choosing the format by extension
    pub fn load(path: &Path) -> RosterResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RosterError::Io(format!("Failed to read page snapshot {}: {}", path.display(), e))
        })?;
        Self::parse_str(&contents, SnapshotFormat::from_path(path))
    }

    /// Write the snapshot in the given format
    pub fn write<W: Write>(&self, writer: &mut W, format: SnapshotFormat) -> RosterResult<()> {
        match format {
            SnapshotFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, self)?;
                writeln!(writer)?;
            }
            SnapshotFormat::Yaml => serde_yaml::to_writer(&mut *writer, self)?,
        }
        Ok(())
    }

    /// Reject snapshots that cannot be rendered unambiguously
    pub fn validate(&self) -> RosterResult<()> {
        let mut keys = HashSet::new();
        for section in &self.sections {
            if section.key.trim().is_empty() {
                return Err(RosterError::Snapshot(format!(
                    "Section '{}' has an empty key",
                    section.title
                )));
            }
            if !keys.insert(section.key.as_str()) {
                return Err(RosterError::Snapshot(format!(
                    "Duplicate section key: {}",
                    section.key
                )));
            }
        }

        let students = self
            .students
            .iter()
            .chain(self.sections.iter().flat_map(|s| s.students.iter()));
        for student in students {
            if student.name.trim().is_empty() {
                return Err(RosterError::Snapshot("Student with an empty name".into()));
            }
        }

        Ok(())
    }

    /// Render the snapshot into a page
    pub fn to_page(&self, labels: &LabelSettings) -> RosterResult<Page> {
        self.validate()?;

        let mut page = Page::new();
        for student in &self.students {
            add_student(&mut page, student, None, labels)?;
        }
        for section in &self.sections {
            let id = page.add_section(section.key.clone(), section.title.clone());
            for student in &section.students {
                add_student(&mut page, student, Some(id), labels)?;
            }
        }
        Ok(page)
    }

    /// Capture a page's sections, students and presented statuses
    pub fn from_page(page: &Page) -> Self {
        let student = |card: &crate::models::Card| StudentSnapshot {
            name: card.name.clone(),
            status: card.badge.as_ref().and_then(|badge| badge.status()),
            actions: page.buttons_for(card.id).map(|button| button.kind).collect(),
        };

        Self {
            sections: page
                .sections()
                .map(|section| SectionSnapshot {
                    key: section.key.clone(),
                    title: section.title.clone(),
                    students: page.cards_in_section(section.id).map(student).collect(),
                })
                .collect(),
            students: page.loose_cards().map(student).collect(),
        }
    }

    /// A full year of sample months, newest first
    pub fn demo() -> Self {
        const NAMES: [&str; 6] = [
            "Alina Sokolova",
            "Boris Kuznetsov",
            "Daria Volkova",
            "Egor Morozov",
            "Kira Pavlova",
            "Maxim Orlov",
        ];

        let sections = (1..=12)
            .map(|index: i32| {
                // month-1 is December, month-12 is January
                let month_number = (13 - index) as u8;
                let title = Month::try_from(month_number)
                    .map(|m| m.name().to_string())
                    .unwrap_or_else(|_| format!("Month {}", month_number));

                let students = NAMES
                    .iter()
                    .enumerate()
                    .map(|(i, name)| StudentSnapshot {
                        name: name.to_string(),
                        status: Some(PaymentStatus::ALL[(i + index as usize) % 3]),
                        actions: default_actions(),
                    })
                    .collect();

                SectionSnapshot {
                    key: month_key(index),
                    title,
                    students,
                }
            })
            .collect();

        Self {
            sections,
            students: Vec::new(),
        }
    }
}

fn add_student(
    page: &mut Page,
    student: &StudentSnapshot,
    section: Option<SectionId>,
    labels: &LabelSettings,
) -> RosterResult<()> {
    let card = page.add_card(student.name.trim(), student.status, section, labels)?;
    for kind in &student.actions {
        page.add_action(card, *kind, labels)?;
    }
    Ok(())
}

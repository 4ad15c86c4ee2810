//! Terminal output.
//!
//! This module provides:
//! - [`Theme`] colour styles, plain or coloured
//! - [`StatusKind`] icons for pass / warning / fail rows
//! - [`render_report`] and [`render_fixes`], the two report sections
//!
//! # Example
//!
//! ```
//! use workshop_check::checks::{Category, CheckReport, CheckResult};
//! use workshop_check::ui::{render_fixes, render_report, Theme};
//!
//! let mut report = CheckReport::new();
//! report.extend(Category::System, vec![CheckResult::fail("Git", "Not installed")]);
//!
//! let theme = Theme::plain();
//! assert!(render_report(&report, &theme).contains("SUMMARY: 0/1 checks passed"));
//! assert!(render_fixes(&report, &theme).contains("Git: sudo apt install -y git"));
//! ```

pub mod icons;
pub mod report;
pub mod theme;

pub use icons::StatusKind;
pub use report::{render_fixes, render_report, Verdict};
pub use theme::{should_use_colors, Theme};

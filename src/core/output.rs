//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides standardized formatting functions for all replay-navigator output,
//! ensuring consistent colors, spacing, and message structure across commands.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for successes, white for messages
//! - **Standardized spacing**: Newline before and after all command outputs
//! - **User-friendly formatting**: Clear visual hierarchy and readable output

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
/// - Newlines before and after for spacing
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
///
/// ```
///
/// # Colors
/// - Checkmark in green, message in white
/// - Newlines before and after for spacing
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
///
/// # Format
/// ```text
///
/// <message>
///
/// ```
///
/// # Colors
/// - Message in white
/// - Newlines before and after for spacing
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
///
/// # Colors
/// - Header in white
/// - Newlines before and after for spacing
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

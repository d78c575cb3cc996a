// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Template library
//!
//! Templates are reusable Markdown snippets grouped by category:
//! `templates/{category}/{name}.md`. A category directory appears on the
//! first save into it and is left in place when its last template is
//! deleted; an empty category simply lists nothing.

pub mod store;

pub use store::TemplateStore;

/// Default number of characters shown by a template preview
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

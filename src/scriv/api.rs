//! # Editor Facade
//!
//! [`Editor`] is a **thin facade** over the resolver and applier. It
//! is the single entry point menus, toolbars, and shortcut handlers
//! are expected to call.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Owns** the document and its collaborators (clipboard, host,
//!   localizer)
//! - **Dispatches** metadata requests to the resolver and actions to
//!   the applier
//! - **Serializes** edits: `apply` takes `&mut self`, so exactly one
//!   apply is in flight per document. The single-writer discipline is
//!   the borrow checker's exclusivity, not a lock.
//!
//! ## What the Facade Does NOT Do
//!
//! - **Business logic**: that lives in `apply/*`
//! - **Presentation**: it returns metadata, never renders it
//!
//! ## Generic Over Document
//!
//! `Editor<D: Document>` works against any backend:
//! - Production: whatever wraps the platform text storage
//! - Testing: `Editor<InMemoryDocument>`

use crate::action::Action;
use crate::apply::{self, Applied};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::StepDefaults;
use crate::document::Document;
use crate::error::Result;
use crate::host::{Host, NoopHost};
use crate::locale::{Catalog, Localizer};
use crate::metadata::{resolve_metadata, ActionMetadata};

pub struct Editor<D: Document> {
    document: D,
    clipboard: Box<dyn Clipboard>,
    host: Box<dyn Host>,
    localizer: Box<dyn Localizer>,
    steps: StepDefaults,
}

impl<D: Document> Editor<D> {
    /// An editor over `document` with the system clipboard, a no-op
    /// host, the built-in catalog, and default step magnitudes.
    pub fn new(document: D) -> Self {
        Self {
            document,
            clipboard: Box::new(SystemClipboard),
            host: Box::new(NoopHost),
            localizer: Box::new(Catalog),
            steps: StepDefaults::default(),
        }
    }

    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    pub fn with_host(mut self, host: impl Host + 'static) -> Self {
        self.host = Box::new(host);
        self
    }

    pub fn with_localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Box::new(localizer);
        self
    }

    pub fn with_steps(mut self, steps: StepDefaults) -> Self {
        self.steps = steps;
        self
    }

    /// Presentation metadata for an action, for rendering a control.
    pub fn metadata(&self, action: &Action) -> ActionMetadata {
        resolve_metadata(action, self.localizer.as_ref())
    }

    /// Apply one action against the document.
    pub fn apply(&mut self, action: &Action) -> Result<Applied> {
        apply::apply(
            action,
            &mut self.document,
            self.clipboard.as_mut(),
            self.host.as_mut(),
        )
    }

    pub fn undo(&mut self) -> Result<Applied> {
        self.apply(&Action::undo())
    }

    pub fn redo(&mut self) -> Result<Applied> {
        self.apply(&Action::redo())
    }

    pub fn steps(&self) -> &StepDefaults {
        &self.steps
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn into_document(self) -> D {
        self.document
    }
}

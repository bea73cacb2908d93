use crate::error::CollaboratorError;

/// The host application surface owning the soft keyboard and the print
/// pipeline. Failures are reported as-is; the applier wraps them
/// without adding semantics.
pub trait Host {
    fn dismiss_keyboard(&mut self) -> Result<(), CollaboratorError>;

    fn print(&mut self) -> Result<(), CollaboratorError>;
}

/// Host that accepts every request and does nothing, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl Host for NoopHost {
    fn dismiss_keyboard(&mut self) -> Result<(), CollaboratorError> {
        Ok(())
    }

    fn print(&mut self) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Counts host requests, optionally failing them.
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        pub keyboard_dismissals: usize,
        pub print_jobs: usize,
        pub fail_with: Option<String>,
    }

    impl RecordingHost {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Self::default()
            }
        }

        fn check(&self, collaborator: &'static str) -> Result<(), CollaboratorError> {
            match &self.fail_with {
                Some(message) => Err(CollaboratorError::new(collaborator, message.clone())),
                None => Ok(()),
            }
        }
    }

    impl Host for RecordingHost {
        fn dismiss_keyboard(&mut self) -> Result<(), CollaboratorError> {
            self.check("keyboard")?;
            self.keyboard_dismissals += 1;
            Ok(())
        }

        fn print(&mut self) -> Result<(), CollaboratorError> {
            self.check("print")?;
            self.print_jobs += 1;
            Ok(())
        }
    }
}

use super::Applied;
use crate::error::{ApplyError, Result};
use crate::host::Host;
use log::warn;

pub fn dismiss_keyboard(host: &mut dyn Host) -> Result<Applied> {
    host.dismiss_keyboard().map_err(|e| {
        warn!("keyboard dismissal failed: {}", e);
        ApplyError::Collaborator(e)
    })?;
    Ok(Applied { mutated: false })
}

pub fn print(host: &mut dyn Host) -> Result<Applied> {
    host.print().map_err(|e| {
        warn!("print request failed: {}", e);
        ApplyError::Collaborator(e)
    })?;
    Ok(Applied { mutated: false })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fixtures::RecordingHost;

    #[test]
    fn requests_reach_the_host() {
        let mut host = RecordingHost::new();
        dismiss_keyboard(&mut host).unwrap();
        print(&mut host).unwrap();
        print(&mut host).unwrap();
        assert_eq!(host.keyboard_dismissals, 1);
        assert_eq!(host.print_jobs, 2);
    }

    #[test]
    fn host_errors_are_wrapped_verbatim() {
        let mut host = RecordingHost::failing("no printer");
        let err = print(&mut host).unwrap_err();
        assert!(err.to_string().contains("no printer"));
    }
}

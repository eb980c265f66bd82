//! Reset Use Case
//!
//! Deletes the persisted deployment records of one or both channels, so the
//! next deploy treats every artifact of those channels as new.

use crate::domain::ports::DeploymentRecordRepository;
use crate::domain::value_objects::DeployChannel;
use crate::error::HubloadResult;

/// Outcome for one channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearedChannel {
    pub channel: DeployChannel,
    /// Entries the record held, `None` when it could not be read
    pub entries: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct ResetResult {
    pub cleared: Vec<ClearedChannel>,
}

impl ResetResult {
    pub fn total_entries(&self) -> usize {
        self.cleared.iter().filter_map(|c| c.entries).sum()
    }
}

pub struct ResetUseCase<RR>
where
    RR: DeploymentRecordRepository,
{
    record_repo: RR,
}

impl<RR> ResetUseCase<RR>
where
    RR: DeploymentRecordRepository,
{
    pub fn new(record_repo: RR) -> Self {
        Self { record_repo }
    }

    /// Delete the records of `channels`.
    ///
    /// A record that fails to load is still deleted; that is how a corrupt
    /// or outdated record file gets cleared.
    pub fn execute(&self, channels: &[DeployChannel]) -> HubloadResult<ResetResult> {
        let mut result = ResetResult::default();

        for &channel in channels {
            let entries = match self.record_repo.load(channel) {
                Ok(record) => Some(record.len()),
                Err(err) => {
                    tracing::warn!(%channel, error = %err, "discarding unreadable record");
                    None
                }
            };
            self.record_repo.delete(channel)?;
            tracing::info!(%channel, ?entries, "deployment record cleared");
            result.cleared.push(ClearedChannel { channel, entries });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DeploymentRecord;
    use crate::infrastructure::TomlRecordRepository;
    use std::fs;
    use tempfile::tempdir;

    fn record_with(keys: &[&str]) -> DeploymentRecord {
        let mut record = DeploymentRecord::new();
        for (i, key) in keys.iter().enumerate() {
            record.set(key.to_string(), i as u64 + 1);
        }
        record
    }

    #[test]
    fn reset_one_channel_leaves_the_other() {
        let dir = tempdir().unwrap();
        let repo = TomlRecordRepository::new(dir.path());
        repo.save(DeployChannel::Modules, &record_with(&["plugins/a.sjs", "plugins/b.sjs"]))
            .unwrap();
        repo.save(DeployChannel::Content, &record_with(&["plugins/x.xml"]))
            .unwrap();

        let use_case = ResetUseCase::new(TomlRecordRepository::new(dir.path()));
        let result = use_case.execute(&[DeployChannel::Modules]).unwrap();

        assert_eq!(
            result.cleared,
            vec![ClearedChannel {
                channel: DeployChannel::Modules,
                entries: Some(2),
            }]
        );
        assert!(!repo.path_for(DeployChannel::Modules).exists());
        assert_eq!(repo.load(DeployChannel::Content).unwrap().len(), 1);
    }

    #[test]
    fn corrupt_record_is_still_cleared() {
        let dir = tempdir().unwrap();
        let repo = TomlRecordRepository::new(dir.path());
        fs::write(repo.path_for(DeployChannel::Content), "version = [").unwrap();

        let use_case = ResetUseCase::new(TomlRecordRepository::new(dir.path()));
        let result = use_case.execute(&DeployChannel::ALL).unwrap();

        assert_eq!(result.cleared.len(), 2);
        assert_eq!(result.cleared[0].entries, Some(0));
        assert_eq!(result.cleared[1].entries, None);
        assert!(!repo.path_for(DeployChannel::Content).exists());
    }
}

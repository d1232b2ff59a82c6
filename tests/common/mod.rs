//! Shared test helpers: an in-memory version-control fake.

#![allow(dead_code)]

use dotback::{DotbackError, VersionControl};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct FakeState {
    pub initialized: bool,
    pub staged: BTreeMap<String, Vec<u8>>,
    pub committed: BTreeMap<String, Vec<u8>>,
    pub commits: Vec<String>,
    pub remotes: Vec<String>,
    pub branch: String,
    pub pushes: Vec<(String, String)>,
    pub calls: Vec<&'static str>,
    pub fail_on: Option<&'static str>,
}

/// Models a repository over a plain directory by snapshotting file contents.
#[derive(Debug)]
pub struct FakeVcs {
    workdir: PathBuf,
    pub state: RefCell<FakeState>,
}

impl FakeVcs {
    pub fn new(workdir: &Path) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
            state: RefCell::new(FakeState {
                branch: "main".to_string(),
                ..FakeState::default()
            }),
        }
    }

    pub fn with_remote(self, name: &str) -> Self {
        self.state.borrow_mut().remotes.push(name.to_string());
        self
    }

    pub fn failing_on(self, call: &'static str) -> Self {
        self.state.borrow_mut().fail_on = Some(call);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.borrow().calls.clone()
    }

    pub fn commit_count(&self) -> usize {
        self.state.borrow().commits.len()
    }

    pub fn pushes(&self) -> Vec<(String, String)> {
        self.state.borrow().pushes.clone()
    }

    fn record(&self, call: &'static str) -> Result<(), DotbackError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        if state.fail_on == Some(call) {
            return Err(DotbackError::CommandFailed {
                command: format!("fake {call}"),
                code: Some(1),
                stderr: format!("{call} rejected"),
            });
        }
        Ok(())
    }
}

impl VersionControl for FakeVcs {
    fn is_repository(&self) -> bool {
        self.state.borrow().initialized
    }

    fn init(&self) -> Result<(), DotbackError> {
        self.record("init")?;
        self.state.borrow_mut().initialized = true;
        Ok(())
    }

    fn stage_all(&self) -> Result<(), DotbackError> {
        self.record("add")?;
        let mut snapshot = BTreeMap::new();
        for entry in fs::read_dir(&self.workdir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                let name = entry.file_name().to_string_lossy().into_owned();
                snapshot.insert(name, fs::read(entry.path())?);
            }
        }
        self.state.borrow_mut().staged = snapshot;
        Ok(())
    }

    fn is_clean(&self) -> Result<bool, DotbackError> {
        self.record("status")?;
        let state = self.state.borrow();
        Ok(state.staged == state.committed)
    }

    fn commit(&self, message: &str) -> Result<(), DotbackError> {
        self.record("commit")?;
        let mut state = self.state.borrow_mut();
        state.committed = state.staged.clone();
        state.commits.push(message.to_string());
        Ok(())
    }

    fn remotes(&self) -> Result<Vec<String>, DotbackError> {
        self.record("remote")?;
        Ok(self.state.borrow().remotes.clone())
    }

    fn current_branch(&self) -> Result<String, DotbackError> {
        self.record("branch")?;
        Ok(self.state.borrow().branch.clone())
    }

    fn push(&self, remote: &str, branch: &str) -> Result<(), DotbackError> {
        self.record("push")?;
        self.state
            .borrow_mut()
            .pushes
            .push((remote.to_string(), branch.to_string()));
        Ok(())
    }
}

//! Shared test helpers: mock gateways with call logs.
#![allow(dead_code)] // each test binary uses a subset of these helpers

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use questline::error::{QuestlineError, Result};
use questline::gateway::{Gateways, GraphFact, GraphService, MemoryService, ProfileStore, StoredProfile};
use questline::state::ProfilePatch;
use questline::tools::ToolOutcome;

fn service_down() -> QuestlineError {
    QuestlineError::api(503, "service unavailable")
}

/// Mock memory service with canned context/search hits.
pub struct MockMemory {
    pub context: Option<String>,
    pub hits: Vec<String>,
    pub fail: bool,
    pub calls: Mutex<Vec<String>>,
}

impl MockMemory {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            context: None,
            hits: Vec::new(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn with_context(context: &str) -> Arc<Self> {
        Arc::new(Self {
            context: Some(context.to_string()),
            hits: Vec::new(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            context: None,
            hits: Vec::new(),
            fail: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl MemoryService for MockMemory {
    async fn add(&self, session_id: &str, role: &str, _content: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("add:{session_id}:{role}"));
        if self.fail {
            return Err(service_down());
        }
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<String>> {
        self.calls.lock().unwrap().push(format!("get:{session_id}"));
        if self.fail {
            return Err(service_down());
        }
        Ok(self.context.clone())
    }

    async fn search(
        &self,
        session_id: &str,
        _query: &str,
        _limit: usize,
    ) -> Result<Option<Vec<String>>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("search:{session_id}"));
        if self.fail {
            return Err(service_down());
        }
        if self.hits.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.hits.clone()))
        }
    }
}

/// Mock graph service.
pub struct MockGraph {
    pub facts: Vec<String>,
    pub fail: bool,
    pub calls: Mutex<Vec<String>>,
}

impl MockGraph {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            facts: Vec::new(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn with_facts(facts: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            facts: facts.iter().map(|f| f.to_string()).collect(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            facts: Vec::new(),
            fail: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GraphService for MockGraph {
    async fn add_fact(&self, user_id: &str, fact: &GraphFact) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("add_fact:{user_id}:{}", fact.kind));
        if self.fail {
            return Err(service_down());
        }
        Ok(())
    }

    async fn search(
        &self,
        user_id: &str,
        _query: &str,
        _limit: usize,
    ) -> Result<Option<Vec<String>>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("search:{user_id}"));
        if self.fail {
            return Err(service_down());
        }
        if self.facts.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.facts.clone()))
        }
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<Vec<String>>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("get_user:{user_id}"));
        if self.fail {
            return Err(service_down());
        }
        if self.facts.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.facts.clone()))
        }
    }
}

/// Mock profile store.
pub struct MockStore {
    pub stored: Option<StoredProfile>,
    pub fail: bool,
    pub calls: Mutex<Vec<String>>,
}

impl MockStore {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            stored: None,
            fail: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn with_profile(stored: StoredProfile) -> Arc<Self> {
        Arc::new(Self {
            stored: Some(stored),
            fail: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            stored: None,
            fail: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ProfileStore for MockStore {
    async fn upsert_profile(&self, user_id: &str, _patch: &ProfilePatch) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("upsert_profile:{user_id}"));
        if self.fail {
            return Err(service_down());
        }
        Ok(())
    }

    async fn insert_skill(&self, user_id: &str, skill: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("insert_skill:{user_id}:{skill}"));
        if self.fail {
            return Err(service_down());
        }
        Ok(())
    }

    async fn insert_need(&self, user_id: &str, need: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("insert_need:{user_id}:{need}"));
        if self.fail {
            return Err(service_down());
        }
        Ok(())
    }

    async fn load_profile(&self, user_id: &str) -> Result<Option<StoredProfile>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("load_profile:{user_id}"));
        if self.fail {
            return Err(service_down());
        }
        Ok(self.stored.clone())
    }
}

/// Gateways assembled from the given mocks.
pub fn gateways_with(
    memory: Arc<MockMemory>,
    graph: Arc<MockGraph>,
    store: Arc<MockStore>,
) -> Gateways {
    Gateways::new(memory, graph, store)
}

/// Gateways where every service is empty and healthy.
pub fn quiet_gateways() -> Gateways {
    gateways_with(MockMemory::empty(), MockGraph::empty(), MockStore::empty())
}

/// Extract the string payload of a `Data` outcome.
pub fn outcome_text(outcome: &ToolOutcome) -> &str {
    match outcome {
        ToolOutcome::Data { value } => value
            .as_str()
            .unwrap_or_else(|| panic!("data outcome was not a string: {value}")),
        other => panic!("expected data outcome, got {other:?}"),
    }
}

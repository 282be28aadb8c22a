use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of the root liveness probe.
#[derive(Serialize, Debug, Clone)]
pub struct Liveness {
    pub message: &'static str,
}

impl Default for Liveness {
    fn default() -> Self {
        Self { message: "API with SQLite works!" }
    }
}

/// Confirmation returned by destructive endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub fn ok() -> Self { Self { ok: true } }
}

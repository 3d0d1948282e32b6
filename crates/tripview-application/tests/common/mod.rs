use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tripview_application::{TripLoader, TripSession};
use tripview_core::config::MapConfig;
use tripview_core::trip::TripSource;
use tripview_core::{Result, TripviewError};

pub const ROME: &str = r#"{
    "trip_title": "Rome",
    "days": [
        {
            "id": 1,
            "title": "Day 1",
            "activities": [
                {
                    "id": 10,
                    "name": "Colosseum",
                    "description": "Flavian amphitheatre",
                    "photo_url": "/photos/colosseum.jpg",
                    "coords": { "lat": 41.8902, "lng": 12.4922 }
                },
                {
                    "id": 11,
                    "name": "Forum",
                    "description": "Heart of ancient Rome",
                    "photo_url": "/photos/forum.jpg",
                    "coords": { "lat": 41.8925, "lng": 12.4853 }
                }
            ]
        },
        {
            "id": 2,
            "title": "Vatican",
            "activities": [
                {
                    "id": 20,
                    "name": "St. Peter's Basilica",
                    "description": "",
                    "photo_url": "/photos/basilica.jpg",
                    "coords": { "lat": 41.9022, "lng": 12.4539 }
                }
            ]
        },
        { "id": 3, "title": "Rest", "activities": [] }
    ]
}"#;

/// In-memory source answering with a fixed outcome and counting fetches.
pub struct MockSource {
    outcome: Result<String>,
    pub calls: AtomicUsize,
}

impl MockSource {
    pub fn ok(body: &str) -> Arc<Self> {
        Self::new(Ok(body.to_string()))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Self::new(Err(TripviewError::fetch(message)))
    }

    fn new(outcome: Result<String>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TripSource for MockSource {
    async fn fetch(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    fn location(&self) -> String {
        "memory://mock-trip.json".to_string()
    }
}

pub fn session_for(source: Arc<MockSource>) -> TripSession {
    TripSession::new(TripLoader::new(source), &MapConfig::default())
}

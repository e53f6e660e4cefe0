//! Mood Probe — fires classroom sentences at a running gateway from several clients at once.
//! Checks that accepted, rejected, and failed submissions come back with the expected status.
//! Run with gateway up: cargo run --bin mood_probe

use reqwest::{Client, StatusCode};
use serde_json::json;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const CONCURRENT_STUDENTS: usize = 10;
const SUBMISSIONS_PER_STUDENT: usize = 5;

// Mix of accepted moods and submissions the gateway must reject.
const SENTENCES: &[&str] = &[
    "I'm feeling amazing",
    "I didn't enjoy the game",
    "We won the match today!",
    "I am okay",
    "I'm not sad anymore",
    "I feel tired and alone",
    "Math class was fun",
    "you are a stupid idiot",
    "   ",
    "My dog is sick and I'm scared",
];

#[tokio::main]
async fn main() {
    let base_url = std::env::var("MOOD2EMOJI_PROBE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    println!(
        "[MOOD PROBE] Starting — {} students × {} submissions = {} total",
        CONCURRENT_STUDENTS,
        SUBMISSIONS_PER_STUDENT,
        CONCURRENT_STUDENTS * SUBMISSIONS_PER_STUDENT
    );
    println!("[MOOD PROBE] Target: {} (ensure gateway is running)", base_url);

    let classified = Arc::new(AtomicU32::new(0));
    let rejected = Arc::new(AtomicU32::new(0));
    let failed = Arc::new(AtomicU32::new(0));
    let latencies: Arc<RwLock<Vec<u64>>> = Arc::new(RwLock::new(Vec::new()));

    let client = Client::new();

    let mut handles = Vec::new();
    for student_id in 0..CONCURRENT_STUDENTS {
        let client = client.clone();
        let base_url = base_url.clone();
        let classified = Arc::clone(&classified);
        let rejected = Arc::clone(&rejected);
        let failed = Arc::clone(&failed);
        let latencies = Arc::clone(&latencies);

        let h = tokio::spawn(async move {
            for r in 0..SUBMISSIONS_PER_STUDENT {
                let text = SENTENCES[(student_id + r) % SENTENCES.len()];

                let start = Instant::now();
                let res = client
                    .post(format!("{}/api/mood", base_url))
                    .json(&json!({ "text": text }))
                    .send()
                    .await;
                let elapsed_ms = start.elapsed().as_millis() as u64;

                match res {
                    Ok(resp) if resp.status() == StatusCode::OK => {
                        classified.fetch_add(1, Ordering::Relaxed);
                        latencies.write().await.push(elapsed_ms);
                    }
                    Ok(resp) if resp.status() == StatusCode::UNPROCESSABLE_ENTITY => {
                        rejected.fetch_add(1, Ordering::Relaxed);
                        latencies.write().await.push(elapsed_ms);
                    }
                    Ok(resp) => {
                        eprintln!("[MOOD PROBE] {:?} -> {}", text, resp.status());
                        failed.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(e) => {
                        eprintln!("[MOOD PROBE] {:?} -> {}", text, e);
                        failed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            }
        });
        handles.push(h);
    }

    for h in handles {
        let _ = h.await;
    }

    let c = classified.load(Ordering::Relaxed);
    let r = rejected.load(Ordering::Relaxed);
    let f = failed.load(Ordering::Relaxed);
    let total = c + r + f;

    let mut sorted = latencies.read().await.clone();
    sorted.sort_unstable();
    let avg_latency_ms = if sorted.is_empty() {
        0.0
    } else {
        sorted.iter().sum::<u64>() as f64 / sorted.len() as f64
    };
    let p95_latency_ms = percentile(&sorted, 0.95);

    println!(
        "[MOOD PROBE] Average Latency: {:.1}ms | p95: {}ms",
        avg_latency_ms, p95_latency_ms
    );
    println!(
        "[MOOD PROBE] Total: {} | Classified: {} | Rejected: {} | Failed: {}",
        total, c, r, f
    );
    if f > 0 {
        std::process::exit(1);
    }
}

/// Nearest-rank percentile over an ascending slice; 0 when empty.
fn percentile(sorted: &[u64], q: f64) -> u64 {
    if sorted.is_empty() {
        return 0;
    }
    let rank = (q * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

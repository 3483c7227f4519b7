use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Entry {
    id: String,
    date: String,
    mood: String,
    emoji: String,
    stress_level: u8,
    sleep_hours: u8,
    energy_level: u8,
    notes: Option<String>,
    gratitude: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Today {
    date: String,
    entry: Option<Entry>,
}

struct TestServer {
    base_url: String,
    data_dir: PathBuf,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_dir(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("wellness_http_{tag}_{}_{}", std::process::id(), nanos));
    path
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/today")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server(data_dir: PathBuf) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_wellness_journal"))
        .env("HOST", "127.0.0.1")
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", &data_dir)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer {
        base_url,
        data_dir,
        child,
    }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server(unique_data_dir("shared")).await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn entries(client: &Client, base_url: &str) -> Vec<Entry> {
    client
        .get(format!("{base_url}/api/entries"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

fn check_in(mood: &str) -> Value {
    json!({
        "mood": mood,
        "stressLevel": 2,
        "sleepHours": 7,
        "energyLevel": 4,
        "notes": "",
        "gratitude": ["a", "b", "  "]
    })
}

#[tokio::test]
async fn http_check_in_appends_and_sets_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = entries(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/entries", server.base_url))
        .json(&check_in("good"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Entry = response.json().await.unwrap();
    assert_eq!(created.mood, "good");
    assert_eq!(created.emoji, "😊");
    assert_eq!(created.gratitude, vec!["a", "b"]);
    assert_eq!((created.stress_level, created.sleep_hours, created.energy_level), (2, 7, 4));
    assert_eq!(created.notes.as_deref(), Some(""));

    let after = entries(&client, &server.base_url).await;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last().map(|e| e.id.as_str()), Some(created.id.as_str()));

    let today: Today = client
        .get(format!("{}/api/today", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!today.date.is_empty());
    let entry = today.entry.expect("today's entry");
    assert_eq!(entry.id, created.id);
    assert_eq!(entry.date, created.date);

    let raw = std::fs::read_to_string(server.data_dir.join("wellnessData.json")).unwrap();
    let stored: Vec<Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), after.len());
    assert_eq!(stored.last().unwrap()["id"], created.id.as_str());
}

#[tokio::test]
async fn http_rejects_invalid_check_in() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = entries(&client, &server.base_url).await;
    let mut body = check_in("okay");
    body["stressLevel"] = json!(9);

    let response = client
        .post(format!("{}/api/entries", server.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(entries(&client, &server.base_url).await.len(), before.len());
}

#[tokio::test]
async fn http_trends_and_dashboard() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let trends: Value = client
        .get(format!("{}/api/trends?timeframe=month", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(trends["timeframe"], "month");
    assert!(trends["entry_count"].as_u64().unwrap() >= 6);

    let bad = client
        .get(format!("{}/api/trends?timeframe=decade", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let dashboard: Value = client
        .get(format!("{}/api/dashboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(dashboard["current_streak"].as_u64().unwrap() >= 1);
    assert_eq!(dashboard["tips"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn http_static_content() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let reply: Value = client
        .post(format!("{}/api/chat", server.base_url))
        .json(&json!({ "message": "I feel like I can't go on" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reply["kind"], "crisis");

    let crisis: Value = client
        .get(format!("{}/api/crisis", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(crisis["resources"][0]["phone"], "988");

    let sessions: Vec<Value> = client
        .get(format!("{}/api/meditations?category=sleep", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["title"], "Deep Sleep Preparation");

    let forum: Value = client
        .get(format!("{}/api/forum?category=stress", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(forum["categories"].as_array().unwrap().len(), 5);
    assert_eq!(forum["posts"].as_array().unwrap().len(), 1);
    assert_eq!(forum["posts"][0]["author"], "MindfulMornings");

    let page = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("Wellness Journal"));
}

#[tokio::test]
async fn http_journal_survives_restart() {
    let _guard = TEST_LOCK.lock().await;
    let data_dir = unique_data_dir("restart");
    let client = Client::new();

    let first = spawn_server(data_dir.clone()).await;
    let seeded = entries(&client, &first.base_url).await;
    assert_eq!(seeded.len(), 6);
    let created: Entry = client
        .post(format!("{}/api/entries", first.base_url))
        .json(&check_in("not-great"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created.mood, "not great");
    drop(first);

    let second = spawn_server(data_dir).await;
    let reloaded = entries(&client, &second.base_url).await;
    assert_eq!(reloaded.len(), 7);
    let ids: Vec<&str> = reloaded.iter().map(|e| e.id.as_str()).collect();
    let expected: Vec<&str> = seeded
        .iter()
        .map(|e| e.id.as_str())
        .chain(std::iter::once(created.id.as_str()))
        .collect();
    assert_eq!(ids, expected);
}

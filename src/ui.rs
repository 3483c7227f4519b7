use crate::chat::GREETING;
use crate::models::MoodEntry;

pub fn render_index(date: &str, today: Option<&MoodEntry>) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{GREETING}}", &escape_html(GREETING))
        .replace("{{TODAY}}", &render_today(today))
}

fn render_today(today: Option<&MoodEntry>) -> String {
    match today {
        Some(entry) => {
            let notes = entry
                .notes
                .as_deref()
                .filter(|notes| !notes.is_empty())
                .unwrap_or("No notes added");
            format!(
                r#"<div class="today-entry"><span class="emoji">{}</span><div><p class="mood">{}</p><p class="hint">{}</p></div></div>"#,
                escape_html(&entry.emoji),
                escape_html(entry.mood.label()),
                escape_html(notes)
            )
        }
        None => r#"<p class="hint">No check-in yet today. Take a minute below.</p>"#.to_string(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Wellness Journal</title>
  <style>
    :root {
      --bg-1: #eef5fb;
      --bg-2: #e4f4ea;
      --ink: #26323a;
      --accent: #3b82f6;
      --accent-2: #16a34a;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(38, 50, 58, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), #ffffff 55%, var(--bg-2));
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .subtitle, .hint {
      margin: 0;
      color: #5f6b73;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(38, 50, 58, 0.08);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8a949b;
    }

    .stat .value {
      display: block;
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent);
    }

    .today-entry {
      display: flex;
      gap: 14px;
      align-items: center;
    }

    .today-entry .emoji {
      font-size: 2.4rem;
    }

    .today-entry .mood {
      margin: 0;
      font-weight: 600;
      text-transform: capitalize;
    }

    form {
      display: grid;
      gap: 14px;
    }

    .moods {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .moods label {
      border: 2px solid #e2e8f0;
      border-radius: 14px;
      padding: 8px 12px;
      cursor: pointer;
    }

    input[type="text"], textarea {
      width: 100%;
      border: 1px solid #d5dde3;
      border-radius: 12px;
      padding: 10px;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    .tabs {
      display: flex;
      gap: 6px;
      margin-bottom: 12px;
    }

    .tab {
      background: #eef2f6;
      color: #5f6b73;
    }

    .tab.active {
      background: var(--accent);
      color: white;
    }

    .bar-row {
      display: grid;
      grid-template-columns: 52px 1fr 36px;
      gap: 10px;
      align-items: center;
      margin: 6px 0;
    }

    .bar-track {
      background: #eef2f6;
      border-radius: 999px;
      height: 12px;
    }

    .bar {
      background: var(--accent-2);
      border-radius: 999px;
      height: 12px;
    }

    #chat-log {
      display: grid;
      gap: 8px;
      max-height: 260px;
      overflow-y: auto;
    }

    .msg {
      padding: 10px 14px;
      border-radius: 14px;
      background: #eef2f6;
    }

    .msg.user {
      background: #dbeafe;
      justify-self: end;
    }

    .msg.crisis {
      background: #fee2e2;
    }

    .status {
      min-height: 1.2em;
      color: #5f6b73;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Wellness Journal</h1>
      <p class="subtitle">Daily mood check-ins for <span id="date">{{DATE}}</span>.</p>
    </header>

    <section class="card">
      <h2>Today's Mood</h2>
      <div id="today">{{TODAY}}</div>
    </section>

    <section class="panel">
      <div class="card stat">
        <span class="label">Current streak</span>
        <span id="streak" class="value">-</span>
      </div>
      <div class="card stat">
        <span class="label">Weekly goal</span>
        <span id="weekly" class="value">-</span>
      </div>
    </section>

    <section class="card">
      <h2>Check in</h2>
      <form id="checkin-form">
        <div class="moods">
          <label><input type="radio" name="mood" value="excellent" /> 😄 Excellent</label>
          <label><input type="radio" name="mood" value="good" /> 😊 Good</label>
          <label><input type="radio" name="mood" value="okay" /> 😐 Okay</label>
          <label><input type="radio" name="mood" value="not great" /> 😔 Not Great</label>
          <label><input type="radio" name="mood" value="terrible" /> 😢 Terrible</label>
        </div>
        <label>Stress level: <output id="stress-out">3</output>/5
          <input type="range" id="stress" min="1" max="5" value="3" /></label>
        <label>Hours of sleep last night: <output id="sleep-out">8</output>
          <input type="range" id="sleep" min="0" max="12" value="8" /></label>
        <label>Energy level: <output id="energy-out">3</output>/5
          <input type="range" id="energy" min="1" max="5" value="3" /></label>
        <input type="text" class="gratitude" placeholder="Gratitude 1..." />
        <input type="text" class="gratitude" placeholder="Gratitude 2..." />
        <input type="text" class="gratitude" placeholder="Gratitude 3..." />
        <textarea id="notes" rows="3" placeholder="How was your day?"></textarea>
        <button type="submit">Save check-in</button>
        <p id="status" class="status"></p>
      </form>
    </section>

    <section class="card">
      <h2>Trends</h2>
      <div class="tabs" role="tablist">
        <button class="tab active" data-timeframe="week" type="button">7 Days</button>
        <button class="tab" data-timeframe="month" type="button">30 Days</button>
        <button class="tab" data-timeframe="year" type="button">1 Year</button>
      </div>
      <p id="trend-notes" class="hint"></p>
      <div id="chart"></div>
      <h2>Mood distribution</h2>
      <div id="distribution"></div>
    </section>

    <section class="card">
      <h2>Support chat</h2>
      <div id="chat-log" data-greeting="{{GREETING}}"></div>
      <form id="chat-form">
        <input type="text" id="chat-input" placeholder="Share what's on your mind..." />
        <button type="submit">Send</button>
      </form>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const chatLog = document.getElementById('chat-log');
    let timeframe = 'week';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const bar = (label, width, tail) => {
      const row = document.createElement('div');
      row.className = 'bar-row';
      const name = document.createElement('span');
      name.textContent = label;
      const track = document.createElement('div');
      track.className = 'bar-track';
      const fill = document.createElement('div');
      fill.className = 'bar';
      fill.style.width = `${width}%`;
      track.appendChild(fill);
      const end = document.createElement('span');
      end.textContent = tail;
      row.append(name, track, end);
      return row;
    };

    const loadDashboard = async () => {
      const res = await fetch('/api/dashboard');
      if (!res.ok) {
        throw new Error('Unable to load dashboard');
      }
      const data = await res.json();
      document.getElementById('streak').textContent = `${data.current_streak} days`;
      document.getElementById('weekly').textContent = `${Math.round(data.weekly_goal_percent)}%`;
    };

    const loadTrends = async () => {
      const res = await fetch(`/api/trends?timeframe=${timeframe}`);
      if (!res.ok) {
        throw new Error('Unable to load trends');
      }
      const data = await res.json();
      document.getElementById('trend-notes').textContent =
        `Mood ${data.average_mood.toFixed(1)}/5 (${data.mood_note}) · ` +
        `Sleep ${data.average_sleep.toFixed(1)}h (${data.sleep_note}) · ` +
        `Stress ${data.average_stress.toFixed(1)}/5 (${data.stress_note})`;
      const chart = document.getElementById('chart');
      chart.replaceChildren(...data.chart.map((point) => bar(point.label, point.width_percent, point.emoji)));
      const dist = document.getElementById('distribution');
      dist.replaceChildren(...data.distribution.map((share) =>
        bar(share.emoji, share.percent, `${Math.round(share.percent)}%`)));
    };

    const refresh = async () => {
      await Promise.all([loadDashboard(), loadTrends()]);
    };

    ['stress', 'sleep', 'energy'].forEach((id) => {
      const input = document.getElementById(id);
      input.addEventListener('input', () => {
        document.getElementById(`${id}-out`).textContent = input.value;
      });
    });

    document.querySelectorAll('.tab').forEach((button) => {
      button.addEventListener('click', () => {
        timeframe = button.dataset.timeframe;
        document.querySelectorAll('.tab').forEach((b) => b.classList.toggle('active', b === button));
        loadTrends().catch((err) => setStatus(err.message, 'error'));
      });
    });

    document.getElementById('checkin-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const mood = document.querySelector('input[name="mood"]:checked');
      if (!mood) {
        setStatus('Pick a mood first', 'error');
        return;
      }
      setStatus('Saving...', 'info');
      const body = {
        mood: mood.value,
        stressLevel: Number(document.getElementById('stress').value),
        sleepHours: Number(document.getElementById('sleep').value),
        energyLevel: Number(document.getElementById('energy').value),
        notes: document.getElementById('notes').value,
        gratitude: [...document.querySelectorAll('.gratitude')].map((input) => input.value)
      };
      try {
        const res = await fetch('/api/entries', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(body)
        });
        if (!res.ok) {
          throw new Error((await res.text()) || 'Request failed');
        }
        setStatus('Saved', 'ok');
        window.location.reload();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    const say = (text, cls) => {
      const msg = document.createElement('div');
      msg.className = `msg ${cls}`;
      msg.textContent = text;
      chatLog.appendChild(msg);
      chatLog.scrollTop = chatLog.scrollHeight;
    };

    document.getElementById('chat-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const input = document.getElementById('chat-input');
      const message = input.value.trim();
      if (!message) {
        return;
      }
      say(message, 'user');
      input.value = '';
      const res = await fetch('/api/chat', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ message })
      });
      if (res.ok) {
        const reply = await res.json();
        say(reply.content, reply.kind);
      }
    });

    say(chatLog.dataset.greeting, 'normal');
    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mood, NewMoodEntry};
    use chrono::Utc;

    #[test]
    fn renders_prompt_without_entry() {
        let html = render_index("2026-01-05", None);
        assert!(html.contains("2026-01-05"));
        assert!(html.contains("No check-in yet today"));
        assert!(html.contains("MindfulBot"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn renders_escaped_entry() {
        let entry = NewMoodEntry {
            mood: Mood::NotGreat,
            emoji: Mood::NotGreat.emoji().to_string(),
            stress_level: 4,
            sleep_hours: 5,
            energy_level: 2,
            notes: Some("<b>midterms</b>".into()),
            gratitude: vec![],
        }
        .into_entry("9".into(), Utc::now());

        let html = render_index("2026-01-05", Some(&entry));
        assert!(html.contains("not great"));
        assert!(html.contains("&lt;b&gt;midterms&lt;/b&gt;"));
    }
}

use crate::chart::format_rate;
use crate::controller::{ChartSlot, Confirmation, Page};
use crate::models::{AnalyticsSnapshot, CompletionRecord, Habit, TotalStats};
use crate::notify::Notification;
use crate::view::{Field, Tab};
use std::fmt::Write;

pub const ANALYTICS_WINDOW_DAYS: u32 = 30;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn render_loading(message: &str) -> String {
    format!(
        r#"<div class="loading"><div class="spinner">&#8987;</div>{}</div>"#,
        escape_html(message)
    )
}

fn empty_state(lines: &[&str]) -> String {
    let mut html = String::from(r#"<div class="empty-state">"#);
    for line in lines {
        let _ = write!(html, "<p>{}</p>", escape_html(line));
    }
    html.push_str("</div>");
    html
}

pub fn render_habits(habits: &[Habit]) -> String {
    if habits.is_empty() {
        return empty_state(&[
            "You are not tracking any bad habits yet.",
            "Add your first habit to start tracking!",
        ]);
    }

    habits.iter().map(render_habit_card).collect()
}

fn render_habit_card(habit: &Habit) -> String {
    let id = habit.id;
    let description = habit
        .description
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(escape_html)
        .unwrap_or_else(|| "No description".to_string());
    let motivation = habit
        .motivation_text
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(|text| format!(r#"<div class="motivation-text">{}</div>"#, escape_html(text)))
        .unwrap_or_default();

    format!(
        r#"<div class="habit-card" data-habit-id="{id}">
  <div class="habit-header">
    <div>
      <h3>{name}</h3>
      <span class="difficulty-badge difficulty-{difficulty}">{difficulty_label}</span>
    </div>
    <form method="post" action="/habits/{id}/delete"><button class="btn-danger" type="submit" title="Delete habit">Delete</button></form>
  </div>
  <p>{description}</p>
  {motivation}
  <div class="habit-meta"><span>{frequency}</span><span>Goal: avoid</span></div>
  <div class="habit-actions">
    <form method="post" action="/habits/{id}/complete"><button class="btn-success" type="submit">Log a day</button></form>
    <form method="post" action="/habits/{id}/history"><button class="btn-secondary" type="submit">History</button></form>
  </div>
</div>"#,
        name = escape_html(&habit.name),
        difficulty = escape_html(habit.difficulty_level.as_str()),
        difficulty_label = escape_html(habit.difficulty_level.label()),
        frequency = escape_html(habit.frequency.label()),
    )
}

/// Stat cards for the analytics tab. Totals without any count render the empty state.
pub fn render_analytics(analytics: &AnalyticsSnapshot) -> String {
    let totals = match analytics.total_stats.as_ref() {
        Some(totals) if !totals.is_empty() => totals,
        _ => return render_no_analytics(),
    };

    let mut html = render_totals(totals);
    for stat in &analytics.habit_stats {
        let _ = write!(
            html,
            r#"<div class="stat-card"><div class="stat-value">{}%</div><div class="stat-label">{}</div><div class="stat-sub">{} of {ANALYTICS_WINDOW_DAYS} days without the habit</div></div>"#,
            format_rate(stat.completion_rate),
            escape_html(&stat.habit_name),
            stat.completed_count.unwrap_or(0),
        );
    }
    html
}

pub fn render_no_analytics() -> String {
    empty_state(&[
        "No analytics data to show yet.",
        "Add habits and log your days to see statistics.",
    ])
}

fn render_totals(totals: &TotalStats) -> String {
    [
        (totals.total_habits, "Bad habits tracked"),
        (totals.daily_habits, "Daily habits"),
        (totals.weekly_habits, "Weekly habits"),
        (totals.monthly_habits, "Monthly habits"),
    ]
    .into_iter()
    .map(|(count, label)| {
        format!(
            r#"<div class="stat-card"><div class="stat-value">{}</div><div class="stat-label">{label}</div></div>"#,
            count.unwrap_or(0)
        )
    })
    .collect()
}

pub fn render_chart(slot: &ChartSlot) -> String {
    match slot {
        ChartSlot::Idle => String::new(),
        ChartSlot::NoData => r#"<div class="empty-state chart-empty">No data to build a chart</div>"#.to_string(),
        ChartSlot::Drawn(chart) => chart.render_svg(),
    }
}

pub fn render_history(records: &[CompletionRecord]) -> String {
    let mut html = String::from(
        r#"<section class="history"><div class="history-header"><h3>Habit history</h3><form method="post" action="/history/close"><button class="btn-secondary" type="submit">Close</button></form></div><ul>"#,
    );
    for record in records {
        let status = if record.completed {
            "&#9989; Avoided"
        } else {
            "&#10060; Not avoided"
        };
        let _ = write!(html, "<li><strong>{}</strong>: {status}", record.completion_date);
        if record.craving_level.get() > 0 {
            let _ = write!(html, " | Craving: {}/10", record.craving_level);
        }
        if record.resistance_level.get() > 0 {
            let _ = write!(html, " | Resistance: {}/10", record.resistance_level);
        }
        if let Some(notes) = record.notes.as_deref().filter(|notes| !notes.is_empty()) {
            let _ = write!(html, r#"<div class="history-notes">Notes: {}</div>"#, escape_html(notes));
        }
        html.push_str("</li>");
    }
    html.push_str("</ul></section>");
    html
}

pub fn render_notifications(notifications: &[Notification]) -> String {
    notifications
        .iter()
        .map(|notice| {
            let leaving = if notice.leaving { " leaving" } else { "" };
            format!(
                r#"<form class="notification notification-{kind}{leaving}" method="post" action="/notifications/{id}/dismiss"><span>{message}</span><button type="submit" aria-label="Dismiss">&times;</button></form>"#,
                kind = notice.kind.as_str(),
                id = notice.id,
                message = escape_html(&notice.message),
            )
        })
        .collect()
}

fn render_confirmation(confirmation: &Confirmation) -> String {
    format!(
        r#"<div class="confirm-backdrop"><form class="confirm-dialog" method="post" action="/confirm"><p>{}</p><button class="btn-danger" type="submit" name="answer" value="yes">OK</button><button class="btn-secondary" type="submit" name="answer" value="no">Cancel</button></form></div>"#,
        escape_html(confirmation.message())
    )
}

fn render_modal(page: &Page) -> String {
    let form = &page.view.completion_form;
    let autofocus = if page.view.focus == Some(Field::CompletionDate) {
        " autofocus"
    } else {
        ""
    };
    let checked = if form.completed { " checked" } else { "" };

    format!(
        r#"<div id="completion-modal" class="modal open">
  <form class="modal-backdrop-form" method="post" action="/modal/close"><input type="hidden" name="via" value="backdrop"><button class="modal-backdrop" type="submit" aria-label="Close"></button></form>
  <div class="modal-content">
    <form id="escape-form" method="post" action="/modal/close"><input type="hidden" name="via" value="escape"></form>
    <form method="post" action="/modal/close"><input type="hidden" name="via" value="close"><button class="close" type="submit" aria-label="Close">&times;</button></form>
    <h2>Log a day</h2>
    <form id="completion-form" method="post" action="/completions">
      <input type="hidden" id="modal-habit-id" name="habit_id" value="{habit_id}">
      <label>Date <input type="date" id="completion-date" name="completion_date" value="{date}"{autofocus}></label>
      <label class="checkbox"><input type="checkbox" id="completed-checkbox" name="completed"{checked}> I managed to avoid the habit</label>
      <label>Craving level: <span id="craving-value">{craving}</span>/10
        <input type="range" id="craving-level" name="craving_level" min="0" max="10" value="{craving}" oninput="document.getElementById('craving-value').textContent=this.value"></label>
      <label>Resistance level: <span id="resistance-value">{resistance}</span>/10
        <input type="range" id="resistance-level" name="resistance_level" min="0" max="10" value="{resistance}" oninput="document.getElementById('resistance-value').textContent=this.value"></label>
      <label>Notes <textarea id="completion-notes" name="notes">{notes}</textarea></label>
      <button class="btn-success" type="submit">Save</button>
    </form>
  </div>
</div>"#,
        habit_id = escape_html(&form.habit_id),
        date = escape_html(&form.completion_date),
        craving = escape_html(&form.craving_level),
        resistance = escape_html(&form.resistance_level),
        notes = escape_html(&form.notes),
    )
}

fn render_habit_form(page: &Page) -> String {
    let form = &page.view.habit_form;
    let option = |value: &str, label: &str, current: &str, fallback: &str| {
        let selected = if current == value || (current.is_empty() && value == fallback) {
            " selected"
        } else {
            ""
        };
        format!(r#"<option value="{value}"{selected}>{label}</option>"#)
    };
    let frequency: String = [
        ("daily", "Daily"),
        ("weekly", "Several times a week"),
        ("monthly", "Several times a month"),
    ]
    .iter()
    .map(|&(value, label)| option(value, label, &form.frequency, "daily"))
    .collect();
    let difficulty: String = [
        ("easy", "Easy to quit"),
        ("medium", "Medium difficulty"),
        ("hard", "Very hard"),
    ]
    .iter()
    .map(|&(value, label)| option(value, label, &form.difficulty_level, "medium"))
    .collect();

    format!(
        r#"<form id="habit-form" class="habit-form" method="post" action="/habits">
  <input type="text" id="habit-name" name="name" placeholder="Habit name" value="{name}">
  <textarea id="habit-desc" name="description" placeholder="Description">{description}</textarea>
  <select id="habit-frequency" name="frequency">{frequency}</select>
  <select id="difficulty-level" name="difficulty_level">{difficulty}</select>
  <textarea id="motivation-text" name="motivation_text" placeholder="Why do you want to quit?">{motivation}</textarea>
  <button class="btn-primary" type="submit">Start tracking</button>
</form>"#,
        name = escape_html(&form.name),
        description = escape_html(&form.description),
        motivation = escape_html(&form.motivation_text),
    )
}

pub fn render_page(page: &Page, notifications: &[Notification]) -> String {
    let active = |tab: Tab| if page.view.active_tab == tab { " active" } else { "" };
    let body_style = if page.view.scroll_locked {
        r#" style="overflow: hidden""#
    } else {
        ""
    };

    fill_template(INDEX_HTML, |marker| match marker {
        "BODY_STYLE" => Some(body_style.to_string()),
        "HABITS_ACTIVE" => Some(active(Tab::Habits).to_string()),
        "ANALYTICS_ACTIVE" => Some(active(Tab::Analytics).to_string()),
        "HABIT_FORM" => Some(render_habit_form(page)),
        "HABITS_LIST" => Some(page.habits_html.clone()),
        "HISTORY" => Some(page.history_html.clone().unwrap_or_default()),
        "STATS_GRID" => Some(page.stats_html.clone()),
        "CHART" => Some(render_chart(&page.chart)),
        "MODAL" => Some(if page.view.modal_open { render_modal(page) } else { String::new() }),
        "CONFIRM" => Some(page.pending.as_ref().map(render_confirmation).unwrap_or_default()),
        "NOTIFICATIONS" => Some(render_notifications(notifications)),
        _ => None,
    })
}

/// Substitutes `{{MARKER}}`s in one left-to-right pass. Inserted fragments are
/// never scanned again, so user text shaped like a marker stays literal.
/// Markers the lookup does not know are copied through unchanged.
fn fill_template(template: &str, mut lookup: impl FnMut(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let marker = &after[..end];
        match lookup(marker) {
            Some(fragment) => out.push_str(&fragment),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Bad Habit Tracker</title>
  <style>
    :root {
      --ink: #2c3e50;
      --muted: #6c757d;
      --accent: #3498db;
      --danger: #e74c3c;
      --success: #27ae60;
      --card: #ffffff;
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: var(--ink);
      padding: 24px 16px 48px;
    }

    .app { width: min(960px, 100%); margin: 0 auto; display: grid; gap: 20px; }
    header h1 { color: white; margin: 0; }
    nav { display: flex; gap: 8px; }
    nav form { margin: 0; }

    button {
      border: none;
      border-radius: 8px;
      padding: 10px 16px;
      font-weight: 600;
      cursor: pointer;
    }

    .nav-btn { background: rgba(255, 255, 255, 0.2); color: white; }
    .nav-btn.active { background: white; color: var(--ink); }
    .btn-primary { background: var(--accent); color: white; }
    .btn-success { background: var(--success); color: white; }
    .btn-danger { background: var(--danger); color: white; }
    .btn-secondary { background: #95a5a6; color: white; }

    .tab-content { display: none; gap: 16px; }
    .tab-content.active { display: grid; }

    .panel, .habit-card, .stat-card, .history {
      background: var(--card);
      border-radius: 12px;
      padding: 18px;
      box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
    }

    .habit-form { display: grid; gap: 10px; }
    .habit-form input, .habit-form textarea, .habit-form select { padding: 8px; border-radius: 6px; border: 1px solid #ddd; }
    .habits-list { display: grid; gap: 14px; }
    .habit-header { display: flex; justify-content: space-between; align-items: flex-start; }
    .habit-header h3 { margin: 0 0 6px; }
    .habit-meta { display: flex; gap: 12px; color: var(--muted); font-size: 0.9rem; }
    .habit-actions { display: flex; gap: 8px; margin-top: 10px; }
    .habit-actions form, .habit-header form { margin: 0; }
    .motivation-text { font-style: italic; border-left: 3px solid var(--accent); padding-left: 10px; }
    .difficulty-badge { font-size: 0.75rem; padding: 2px 8px; border-radius: 999px; }
    .difficulty-easy { background: #d4edda; }
    .difficulty-medium { background: #fff3cd; }
    .difficulty-hard { background: #f8d7da; }

    .stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 14px; }
    .stat-value { font-size: 1.8rem; font-weight: 700; color: var(--accent); }
    .stat-label { color: var(--muted); }
    .stat-sub { font-size: 0.8rem; color: var(--muted); }
    .chart-container { background: var(--card); border-radius: 12px; padding: 16px; }
    #progress-chart { width: 100%; height: 260px; display: block; }
    .chart-grid { stroke: rgba(0, 0, 0, 0.1); }
    .chart-label { fill: #7a746d; font-size: 11px; }

    .loading, .empty-state { text-align: center; padding: 40px; color: var(--muted); grid-column: 1 / -1; }

    .modal { position: fixed; inset: 0; z-index: 1000; overflow-y: auto; }
    .modal-backdrop-form { position: fixed; inset: 0; margin: 0; }
    .modal-backdrop { width: 100%; height: 100%; border-radius: 0; background: rgba(0, 0, 0, 0.5); }
    .modal-content { position: relative; margin: 60px auto; width: min(520px, 92%); background: white; border-radius: 12px; padding: 24px; }
    .modal-content form { display: grid; gap: 12px; }
    .close { position: absolute; top: 10px; right: 12px; background: transparent; font-size: 1.5rem; }

    .confirm-backdrop { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); display: grid; place-items: center; z-index: 2000; }
    .confirm-dialog { background: white; border-radius: 12px; padding: 24px; display: flex; flex-wrap: wrap; gap: 10px; max-width: 420px; }
    .confirm-dialog p { width: 100%; margin: 0 0 8px; }

    .history-header { display: flex; justify-content: space-between; align-items: center; }
    .history-notes { color: var(--muted); margin-left: 12px; }

    .notifications { position: fixed; top: 20px; right: 20px; display: grid; gap: 10px; z-index: 10000; }
    .notification {
      display: flex;
      gap: 12px;
      align-items: center;
      padding: 15px 20px;
      border-radius: 8px;
      color: white;
      font-weight: 500;
      max-width: 400px;
      box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
      animation: slideIn 0.3s ease;
    }
    .notification button { background: transparent; color: white; padding: 0 4px; }
    .notification-success { background: var(--success); }
    .notification-error { background: var(--danger); }
    .notification-info { background: var(--accent); }
    .notification.leaving { animation: slideOut 0.3s ease forwards; }

    @keyframes slideIn {
      from { transform: translateX(100%); opacity: 0; }
      to { transform: translateX(0); opacity: 1; }
    }
    @keyframes slideOut {
      from { transform: translateX(0); opacity: 1; }
      to { transform: translateX(100%); opacity: 0; }
    }
  </style>
</head>
<body{{BODY_STYLE}}>
  <main class="app">
    <header><h1>Bad Habit Tracker</h1></header>
    <nav>
      <form method="post" action="/tab/habits"><button class="nav-btn{{HABITS_ACTIVE}}" data-tab="habits" type="submit">My habits</button></form>
      <form method="post" action="/tab/analytics"><button class="nav-btn{{ANALYTICS_ACTIVE}}" data-tab="analytics" type="submit">Analytics</button></form>
    </nav>

    <section id="habits" class="tab-content{{HABITS_ACTIVE}}">
      <div class="panel">
        <h2>Track a new habit</h2>
        {{HABIT_FORM}}
      </div>
      {{HISTORY}}
      <div id="habits-list" class="habits-list">{{HABITS_LIST}}</div>
    </section>

    <section id="analytics" class="tab-content{{ANALYTICS_ACTIVE}}">
      <div id="stats-grid" class="stats-grid">{{STATS_GRID}}</div>
      <div class="chart-container">{{CHART}}</div>
    </section>
  </main>

  {{MODAL}}
  {{CONFIRM}}
  <div class="notifications">{{NOTIFICATIONS}}</div>

  <script>
    document.addEventListener('keydown', (e) => {
      if (e.key === 'Escape') {
        const form = document.getElementById('escape-form');
        if (form) {
          form.submit();
        }
      }
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Frequency, HabitStat, Level};
    use crate::view::ViewState;
    use chrono::NaiveDate;

    fn habit(name: &str, description: Option<&str>) -> Habit {
        Habit {
            id: 1,
            name: name.into(),
            description: description.map(Into::into),
            habit_type: Some("bad".into()),
            frequency: Frequency::Daily,
            target_count: Some(1),
            motivation_text: Some("<i>for my kids</i>".into()),
            difficulty_level: Difficulty::Hard,
            created_at: None,
        }
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn empty_habits_render_empty_state() {
        let html = render_habits(&[]);
        assert!(html.contains("empty-state"));
        assert!(html.contains("not tracking any bad habits"));
        assert!(!html.contains("loading"));
    }

    #[test]
    fn habit_card_escapes_user_text() {
        let html = render_habits(&[habit("<img src=x onerror=boom>", Some("a < b"))]);
        assert!(html.contains("&lt;img src=x onerror=boom&gt;"));
        assert!(!html.contains("<img"));
        assert!(html.contains("a &lt; b"));
        assert!(html.contains("&lt;i&gt;for my kids&lt;/i&gt;"));
        assert!(html.contains("Very hard"));
        assert!(html.contains(r#"action="/habits/1/delete""#));
    }

    #[test]
    fn missing_description_has_placeholder() {
        let html = render_habits(&[habit("Coffee", None)]);
        assert!(html.contains("No description"));
    }

    #[test]
    fn analytics_without_totals_is_empty_state() {
        let html = render_analytics(&AnalyticsSnapshot::default());
        assert!(html.contains("No analytics data"));
        assert!(!html.contains("stat-card"));
    }

    #[test]
    fn analytics_cards_include_each_habit() {
        let snapshot = AnalyticsSnapshot {
            total_stats: Some(TotalStats {
                total_habits: Some(2),
                daily_habits: Some(1),
                weekly_habits: None,
                monthly_habits: Some(1),
            }),
            habit_stats: vec![HabitStat {
                habit_id: Some(1),
                habit_name: "Chips & <soda>".into(),
                completion_rate: 43.3,
                completed_count: Some(13),
            }],
        };
        let html = render_analytics(&snapshot);
        assert_eq!(html.matches("stat-card").count(), 5);
        assert!(html.contains("43.3%"));
        assert!(html.contains("Chips &amp; &lt;soda&gt;"));
        assert!(html.contains("13 of 30 days"));
    }

    #[test]
    fn history_escapes_notes_and_skips_zero_levels() {
        let records = vec![CompletionRecord {
            id: Some(1),
            habit_id: 1,
            completion_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            completed: true,
            notes: Some("<b>ok</b>".into()),
            craving_level: Level::new(4).unwrap(),
            resistance_level: Level::default(),
            created_at: None,
        }];
        let html = render_history(&records);
        assert!(html.contains("2026-02-01"));
        assert!(html.contains("Craving: 4/10"));
        assert!(!html.contains("Resistance:"));
        assert!(html.contains("&lt;b&gt;ok&lt;/b&gt;"));
    }

    #[test]
    fn notifications_carry_kind_and_escape_message() {
        let html = render_notifications(&[Notification {
            id: 3,
            kind: crate::notify::NoticeKind::Error,
            message: "bad <input>".into(),
            leaving: true,
        }]);
        assert!(html.contains("notification-error leaving"));
        assert!(html.contains("bad &lt;input&gt;"));
    }

    #[test]
    fn template_inserts_each_fragment_once() {
        let html = fill_template("<a>{{ONE}}</a><b>{{TWO}}</b>{{UNKNOWN}}", |marker| match marker {
            "ONE" => Some("{{TWO}}".to_string()),
            "TWO" => Some("2".to_string()),
            _ => None,
        });
        assert_eq!(html, "<a>{{TWO}}</a><b>2</b>{{UNKNOWN}}");
        assert_eq!(fill_template("tail {{OPEN", |_| Some("x".into())), "tail {{OPEN");
    }

    #[test]
    fn page_keeps_marker_shaped_names_literal() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let mut view = ViewState::new(today);
        view.habit_form.name = "{{HABITS_LIST}}".into();
        let page = Page {
            view,
            habits_html: render_habits(&[habit("Quit {{NOTIFICATIONS}} now", None)]),
            stats_html: String::new(),
            chart: ChartSlot::Idle,
            history_html: None,
            pending: None,
            habits_loaded_at: None,
        };
        let notice = Notification {
            id: 7,
            kind: crate::notify::NoticeKind::Info,
            message: "saved".into(),
            leaving: false,
        };
        let html = render_page(&page, &[notice]);
        assert!(html.contains("<h3>Quit {{NOTIFICATIONS}} now</h3>"));
        assert_eq!(html.matches("/notifications/7/dismiss").count(), 1);
        assert!(html.contains(r#"value="{{HABITS_LIST}}""#));
        assert_eq!(html.matches(r#"data-habit-id="1""#).count(), 1);
        assert!(!html.contains("{{BODY_STYLE}}"));
    }

    #[test]
    fn habit_card_shows_unknown_labels_escaped() {
        let mut odd = habit("Soda", None);
        odd.frequency = Frequency::Other("<hourly>".into());
        odd.difficulty_level = Difficulty::Other("extreme".into());
        let html = render_habits(&[odd]);
        assert!(html.contains("&lt;hourly&gt;"));
        assert!(html.contains("difficulty-extreme"));
        assert!(html.contains(">extreme</span>"));
    }
}

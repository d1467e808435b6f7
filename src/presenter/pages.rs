//! Server-rendered HTML pages.

use html_escape::encode_text;

use crate::aggregator::Level;
use crate::presenter::source::ZoneView;

const CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem; color: #1d1d1f; }
header { display: flex; justify-content: space-between; align-items: baseline; }
table { border-collapse: collapse; width: 100%; margin-top: 1rem; }
th, td { border-bottom: 1px solid #ddd; padding: 0.5rem; text-align: left; vertical-align: top; }
.level-high { background: #e3f6e8; }
.level-medium { background: #fdf3d8; }
.level-low { background: #fbe3e3; }
.badge { font-weight: 600; }
.error { color: #b3261e; }
form.inline { display: inline; }
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{CSS}</style>
</head>
<body>
{body}
</body>
</html>
"#
    )
}

fn level_class(level: Level) -> &'static str {
    match level {
        Level::High => "level-high",
        Level::Medium => "level-medium",
        Level::Low => "level-low",
    }
}

/// Login gate page, with an optional error line.
pub fn login_page(error: Option<&str>) -> String {
    let error = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, encode_text(e)))
        .unwrap_or_default();

    layout(
        "The White Box: Sign in",
        &format!(
            r#"<header><h1>The White Box</h1></header>
<main>
    <p>See how work and incentives are assigned across delivery zones.</p>
    {error}
    <form method="post" action="/login">
        <label for="username">Name</label>
        <input id="username" name="username" type="text" autofocus>
        <button type="submit">Enter</button>
    </form>
</main>"#
        ),
    )
}

fn zone_row(view: &ZoneView) -> String {
    let s = &view.summary;
    let p = &view.profile;

    let fairness = match (&p.fairness_label, p.avg_pay) {
        (Some(label), Some(pay)) => format!("{} (avg pay {pay:.2})", encode_text(label)),
        (Some(label), None) => encode_text(label).into_owned(),
        (None, Some(pay)) => format!("avg pay {pay:.2}"),
        (None, None) => "&ndash;".to_string(),
    };

    format!(
        r#"        <tr class="{class}">
            <td>{zone}</td>
            <td class="badge">{assignment}</td>
            <td>{incentives}</td>
            <td>{avg:.2} ({min:.2} to {max:.2})</td>
            <td>{lat:.3}, {lng:.3}</td>
            <td>{fairness}</td>
            <td>{explanation}</td>
        </tr>
"#,
        class = level_class(s.assignment_level),
        zone = encode_text(&s.zone),
        assignment = s.assignment_level,
        incentives = s.incentive_likelihood,
        avg = s.avg_fare,
        min = s.min_fare,
        max = s.max_fare,
        lat = s.lat,
        lng = s.lng,
        explanation = encode_text(&s.explanation),
    )
}

/// Dashboard page: one color-coded row per zone.
pub fn dashboard_page(user: &str, zones: &[ZoneView]) -> String {
    let rows: String = zones.iter().map(zone_row).collect();

    layout(
        "The White Box",
        &format!(
            r#"<header>
    <h1>The White Box</h1>
    <div>Signed in as <strong>{user}</strong>
        <form class="inline" method="post" action="/logout"><button type="submit">Sign out</button></form>
    </div>
</header>
<main>
    <p>{count} zones. Green rows get work assigned most readily, red rows least.</p>
    <table>
        <thead>
        <tr>
            <th>Zone</th><th>Task availability</th><th>Incentives</th>
            <th>Fare (min to max)</th><th>Location</th><th>Pay fairness</th><th>Why</th>
        </tr>
        </thead>
        <tbody>
{rows}        </tbody>
    </table>
</main>"#,
            user = encode_text(user),
            count = zones.len(),
        ),
    )
}

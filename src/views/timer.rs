use chrono::{DateTime, Utc};

/// Renders the countdown widget.
///
/// The script ticks entirely in the browser against the fixed target
/// computed from the session start time; it never talks back to the server.
/// Reaching zero only flips the display to "TIME UP!", the form stays
/// submittable.
pub fn countdown_widget(start_time: DateTime<Utc>, duration_minutes: u32) -> String {
    let target_ms = start_time.timestamp_millis() + (duration_minutes as i64) * 60 * 1000;

    format!(
        r#"<div class="timer">Time Remaining: <span id="timer_display">Loading...</span></div>
<script>
var countDownDate = {target_ms};
var x = setInterval(function() {{
    var now = new Date().getTime();
    var distance = countDownDate - now;

    var minutes = Math.floor((distance % (1000 * 60 * 60)) / (1000 * 60));
    var seconds = Math.floor((distance % (1000 * 60)) / 1000);

    minutes = minutes < 10 ? "0" + minutes : minutes;
    seconds = seconds < 10 ? "0" + seconds : seconds;

    var display = document.getElementById("timer_display");
    if (display) {{
        display.innerHTML = minutes + ":" + seconds;
    }}

    if (distance < 0) {{
        clearInterval(x);
        if (display) {{
            display.innerHTML = "TIME UP!";
        }}
    }}
}}, 1000);
</script>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_embeds_the_deadline_in_epoch_millis() {
        let start = DateTime::parse_from_rfc3339("2026-01-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let html = countdown_widget(start, 30);
        let expected = start.timestamp_millis() + 30 * 60 * 1000;
        assert!(html.contains(&format!("var countDownDate = {};", expected)));
        assert!(html.contains("TIME UP!"));
    }
}

//! View model of the counter page

use std::fmt::Write;

use crate::models::{CounterAction, CounterKind, CountersSnapshot};

const STYLE: &str = r#"
    body { font-family: sans-serif; text-align: center; background: #f4f1ea; }
    .counters { display: flex; justify-content: center; gap: 4rem; }
    .counter .value { font-size: 4rem; margin: 1rem 0; transition: transform 0.3s; }
    .counter.animate-plus .value { transform: scale(1.4); color: #2e7d32; }
    .counter.animate-minus .value { transform: scale(0.7); color: #c62828; }
    .flash { background: #ffe0b2; padding: 0.5rem; margin: 1rem auto; max-width: 30rem; }
    button[disabled] { opacity: 0.4; }
"#;

const SCRIPT: &str = r#"
    (function () {
      var body = document.body;
      var animation = body.dataset.animation;
      if (animation) {
        var parts = animation.split("_");
        var counter = document.getElementById(parts[0]);
        if (counter) { counter.classList.add("animate-" + parts[1]); }
        var sound = new Audio("/sounds/" + body.dataset.sound);
        sound.play().catch(function () {});
      }
      var cooldown = parseInt(body.dataset.cooldown, 10);
      if (document.querySelector("button[disabled]")) {
        setTimeout(function () { window.location.reload(); }, cooldown * 1000);
      }
    })();
"#;

/// Everything the counter page shows
#[derive(Debug, Clone)]
pub struct IndexPage {
    pub counts: CountersSnapshot,
    pub seufz_disabled: bool,
    pub stoehn_disabled: bool,
    pub cooldown_secs: u64,
    pub flash: Option<String>,
    pub animation: Option<CounterAction>,
}

impl IndexPage {
    fn disabled(&self, kind: CounterKind) -> bool {
        match kind {
            CounterKind::Seufz => self.seufz_disabled,
            CounterKind::Stoehn => self.stoehn_disabled,
        }
    }

    fn render_counter(&self, out: &mut String, kind: CounterKind) {
        let disabled = if self.disabled(kind) { " disabled" } else { "" };
        let _ = write!(
            out,
            r#"
      <section class="counter" id="{name}">
        <h2>{label}-Counter</h2>
        <div class="value">{value}</div>
        <form method="post" action="/{name}_increment">
          <button type="submit"{disabled}>{label} +1</button>
        </form>
        <form method="post" action="/{name}_decrement">
          <button type="submit"{disabled}>{label} -1</button>
        </form>
      </section>"#,
            name = kind,
            label = kind.label(),
            value = self.counts.get(kind),
        );
    }

    /// Render the full HTML document
    ///
    /// Only server-generated text ends up in the markup: the flash message is
    /// built from a known counter and the animation hint has been parsed.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(4096);
        let (animation, sound) = match &self.animation {
            Some(action) => (action.animation(), action.sound()),
            None => (String::new(), ""),
        };

        let _ = write!(
            out,
            r#"<!DOCTYPE html>
<html lang="de">
  <head>
    <meta charset="utf-8">
    <title>Jönis Counter</title>
    <style>{STYLE}</style>
  </head>
  <body data-animation="{animation}" data-sound="{sound}" data-cooldown="{cooldown}">
    <h1>Jönis Counter</h1>"#,
            cooldown = self.cooldown_secs,
        );

        if let Some(flash) = &self.flash {
            let _ = write!(out, r#"
    <div class="flash">{flash}</div>"#);
        }

        out.push_str(r#"
    <div class="counters">"#);
        for kind in CounterKind::ALL {
            self.render_counter(&mut out, kind);
        }
        let _ = write!(
            out,
            r#"
    </div>
    <p>Zwischen zwei Klicks auf denselben Counter liegen mindestens {cooldown} Sekunden.</p>
    <script>{SCRIPT}</script>
  </body>
</html>
"#,
            cooldown = self.cooldown_secs,
        );

        out
    }
}

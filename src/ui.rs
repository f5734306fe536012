use crate::catalog::{Exercise, EXERCISES};

pub fn render_picker() -> String {
    let cards: String = EXERCISES
        .iter()
        .map(|exercise| {
            format!(
                r##"<a class="card" href="/?exercise={slug}" style="--exercise: {color}">
        <span class="swatch"></span>
        <span class="name">{name}</span>
        <span class="muscle">{description}</span>
      </a>
"##,
                slug = exercise.slug,
                color = exercise.color,
                name = exercise.name,
                description = exercise.description,
            )
        })
        .collect();

    PICKER_HTML.replace("{{CARDS}}", &cards)
}

pub fn render_exercise(exercise: &Exercise, today: &str) -> String {
    EXERCISE_HTML
        .replace("{{NAME}}", exercise.name)
        .replace("{{SLUG}}", exercise.slug)
        .replace("{{DESC}}", exercise.description)
        .replace("{{COLOR}}", exercise.color)
        .replace("{{TODAY}}", today)
}

const PICKER_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Gym Progress Tracker</title>
  <style>
    :root {
      --bg-1: #f2f4f8;
      --bg-2: #dbe4f0;
      --ink: #24292f;
      --card: #ffffff;
      --shadow: 0 20px 48px rgba(36, 52, 71, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 40px 18px 56px;
    }

    .app {
      width: min(820px, 100%);
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .subtitle {
      margin: 0;
      color: #5c6672;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      padding: 20px;
      box-shadow: var(--shadow);
      text-decoration: none;
      color: inherit;
      display: grid;
      gap: 8px;
      border-top: 6px solid var(--exercise);
      transition: transform 150ms ease;
    }

    .card:hover {
      transform: translateY(-3px);
    }

    .swatch {
      width: 34px;
      height: 10px;
      border-radius: 999px;
      background: var(--exercise);
    }

    .name {
      font-size: 1.15rem;
      font-weight: 600;
    }

    .muscle {
      color: #6a7380;
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Gym Progress Tracker</h1>
      <p class="subtitle">Pick an exercise to log a weight and see your progress.</p>
    </header>
    <section class="grid">
      {{CARDS}}
    </section>
  </main>
</body>
</html>
"#;

const EXERCISE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{NAME}} - Gym Progress Tracker</title>
  <style>
    :root {
      --bg-1: #f2f4f8;
      --bg-2: #dbe4f0;
      --ink: #24292f;
      --exercise: {{COLOR}};
      --card: #ffffff;
      --shadow: 0 20px 48px rgba(36, 52, 71, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 40px 18px 56px;
    }

    .app {
      width: min(820px, 100%);
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header {
      display: grid;
      gap: 4px;
      border-left: 8px solid var(--exercise);
      padding-left: 16px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 4vw, 2.2rem);
    }

    .subtitle {
      margin: 0;
      color: #5c6672;
    }

    form {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
      align-items: end;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      color: #5c6672;
    }

    input {
      border: 1px solid #ccd4de;
      border-radius: 10px;
      padding: 10px 12px;
      font-size: 1rem;
      font-family: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--exercise);
      color: #1f2429;
    }

    button:active {
      transform: scale(0.98);
    }

    .chart-card {
      border: 1px solid #e3e8ee;
      border-radius: 16px;
      padding: 16px;
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--exercise);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--exercise);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(36, 52, 71, 0.12);
    }

    .chart-label {
      fill: #6a7380;
      font-size: 11px;
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .stat {
      border: 1px solid #e3e8ee;
      border-radius: 14px;
      padding: 14px;
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8a93a0;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
    }

    .status {
      font-size: 0.95rem;
      color: #5c6672;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .back {
      color: #5c6672;
      text-decoration: none;
      font-size: 0.95rem;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>{{NAME}}</h1>
      <p class="subtitle">{{DESC}}</p>
    </header>

    <form id="log-form" method="post" action="/log">
      <input type="hidden" name="exercise" value="{{SLUG}}" />
      <label>
        Workout date
        <input type="date" name="date" id="date-input" value="{{TODAY}}" required />
      </label>
      <label>
        Weight (kg)
        <input type="number" name="weight" id="weight-input" min="0" step="0.5" value="50" required />
      </label>
      <button type="submit">Save</button>
    </form>

    <div class="chart-card">
      <svg id="chart" viewBox="0 0 600 260" aria-label="Weight progress chart" role="img"></svg>
    </div>

    <section class="metrics">
      <div class="stat">
        <span class="label">Last weight</span>
        <span class="value" id="metric-last">--</span>
      </div>
      <div class="stat">
        <span class="label">Best</span>
        <span class="value" id="metric-best">--</span>
      </div>
      <div class="stat">
        <span class="label">Change</span>
        <span class="value" id="metric-delta">--</span>
      </div>
    </section>

    <div class="status" id="status"></div>
    <a class="back" href="/">&larr; Back to exercises</a>
  </main>

  <script>
    const chartEl = document.getElementById('chart');
    const statusEl = document.getElementById('status');
    const lastEl = document.getElementById('metric-last');
    const bestEl = document.getElementById('metric-best');
    const deltaEl = document.getElementById('metric-delta');
    const form = document.getElementById('log-form');
    const dateInput = document.getElementById('date-input');
    const weightInput = document.getElementById('weight-input');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const formatKg = (value) => {
      const rounded = Math.round(value * 10) / 10;
      return (Number.isInteger(rounded) ? rounded.toString() : rounded.toFixed(1)) + ' kg';
    };

    const renderLineChart = (points) => {
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet - log your first weight</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const values = points.map((point) => point.value);
      let min = Math.min(...values);
      let max = Math.max(...values);
      if (min === max) {
        min -= 1;
        max += 1;
      }

      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${Math.round(value * 10) / 10}</text>`;
      }

      const labelEvery = points.length > 8 ? Math.ceil(points.length / 8) : 1;
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`;
        })
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="4" />`)
        .join('');

      chartEl.innerHTML = `
        ${grid}
        <path class="chart-line" d="${path}" />
        ${circles}
        ${xLabels}
      `;
    };

    const renderProgress = (progress) => {
      const points = progress.records.map((record) => ({
        label: record.date.slice(5),
        value: record.weight
      }));
      renderLineChart(points);

      if (!progress.summary) {
        lastEl.textContent = '--';
        bestEl.textContent = '--';
        deltaEl.textContent = '--';
        return;
      }

      lastEl.textContent = formatKg(progress.summary.last);
      bestEl.textContent = formatKg(progress.summary.best);
      if (progress.summary.delta === null) {
        deltaEl.textContent = 'No prior data';
      } else {
        const sign = progress.summary.delta >= 0 ? '+' : '';
        deltaEl.textContent = sign + formatKg(progress.summary.delta);
      }
    };

    const loadProgress = async () => {
      const res = await fetch('/api/progress?exercise={{SLUG}}');
      if (!res.ok) {
        throw new Error('Unable to load progress');
      }
      renderProgress(await res.json());
    };

    const saveRecord = async () => {
      setStatus('Saving...', 'info');
      const res = await fetch('/api/log', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          exercise: '{{SLUG}}',
          date: dateInput.value,
          weight: Number(weightInput.value)
        })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      renderProgress(await res.json());
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      saveRecord().catch((err) => setStatus(err.message, 'error'));
    });

    loadProgress().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

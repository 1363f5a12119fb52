use crate::models::TodayResponse;

pub fn render_index(today: &TodayResponse) -> String {
    let bootstrap = serde_json::to_string(today).unwrap_or_else(|_| "null".to_string());
    INDEX_HTML.replace("{{BOOTSTRAP}}", &bootstrap)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Locked In</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600;700&display=swap');

    :root {
      --bg: #0a0a0a;
      --panel: #171717;
      --card: #0d0d0d;
      --border: #262626;
      --ink: #e5e5e5;
      --muted: #737373;
      --main: #059669;
      --main-soft: rgba(5, 150, 105, 0.18);
      --side: #dc2626;
      --side-soft: rgba(220, 38, 38, 0.18);
      --water: #3b82f6;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 24px 16px 64px;
      display: flex;
      justify-content: center;
    }

    .app {
      width: min(720px, 100%);
      display: grid;
      gap: 20px;
    }

    header {
      display: flex;
      align-items: flex-end;
      justify-content: space-between;
      gap: 16px;
      border-bottom: 1px solid var(--border);
      padding-bottom: 18px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 5vw, 2.6rem);
      font-weight: 700;
      letter-spacing: -0.03em;
      color: white;
    }

    h1 span {
      color: var(--main);
    }

    .tagline {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.85rem;
    }

    .reset-btn {
      appearance: none;
      background: transparent;
      border: 1px solid var(--border);
      border-radius: 8px;
      color: var(--muted);
      padding: 8px 16px;
      font-size: 0.75rem;
      font-weight: 600;
      letter-spacing: 0.12em;
      text-transform: uppercase;
      cursor: pointer;
    }

    .reset-btn:hover {
      background: var(--panel);
      color: var(--ink);
    }

    .bars {
      display: grid;
      gap: 8px;
    }

    .bar {
      position: relative;
      height: 30px;
      background: var(--panel);
      border: 1px solid var(--border);
      border-radius: 999px;
      overflow: hidden;
    }

    .bar.side {
      height: 22px;
      border-color: rgba(220, 38, 38, 0.3);
    }

    .bar .fill {
      height: 100%;
      width: 0;
      background: var(--main);
      transition: width 400ms ease;
    }

    .bar.side .fill {
      background: var(--side);
    }

    .bar .caption {
      position: absolute;
      inset: 0;
      display: flex;
      align-items: center;
      justify-content: center;
      font-size: 0.7rem;
      font-weight: 700;
      letter-spacing: 0.14em;
      text-transform: uppercase;
      color: white;
      pointer-events: none;
    }

    section {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 16px;
      padding: 20px;
      display: grid;
      gap: 12px;
    }

    section.side-quests {
      border-color: rgba(220, 38, 38, 0.3);
    }

    section h2 {
      margin: 0;
      font-size: 0.75rem;
      font-weight: 600;
      letter-spacing: 0.14em;
      text-transform: uppercase;
      color: var(--muted);
    }

    section.side-quests h2 {
      color: var(--side);
    }

    .check {
      appearance: none;
      width: 100%;
      display: flex;
      align-items: center;
      gap: 12px;
      background: var(--bg);
      border: 1px solid var(--border);
      border-radius: 12px;
      color: var(--muted);
      padding: 12px 14px;
      font-size: 0.9rem;
      font-family: inherit;
      cursor: pointer;
      transition: border-color 150ms ease, background 150ms ease;
    }

    .check .box {
      width: 20px;
      height: 20px;
      border: 1px solid var(--border);
      border-radius: 5px;
      display: flex;
      align-items: center;
      justify-content: center;
      font-size: 0.75rem;
      color: var(--bg);
      flex-shrink: 0;
    }

    .check.done {
      background: var(--main-soft);
      border-color: var(--main);
      color: white;
    }

    .check.done .box {
      background: var(--main);
      border-color: var(--main);
    }

    .side-quests .check.done {
      background: var(--side-soft);
      border-color: var(--side);
    }

    .side-quests .check.done .box {
      background: var(--side);
      border-color: var(--side);
    }

    .water-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      background: var(--bg);
      border: 1px solid var(--border);
      border-radius: 12px;
      padding: 12px 14px;
    }

    .water-row .label {
      font-size: 0.9rem;
      color: var(--muted);
    }

    .glasses {
      display: flex;
      gap: 10px;
    }

    .glass {
      appearance: none;
      width: 32px;
      height: 32px;
      border-radius: 50%;
      border: 1px solid rgba(59, 130, 246, 0.5);
      background: transparent;
      cursor: pointer;
      transition: background 150ms ease;
    }

    .glass.filled {
      background: var(--water);
      border-color: var(--water);
    }

    footer {
      text-align: center;
      color: #525252;
      font-size: 0.75rem;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Locked <span>In</span></h1>
        <p class="tagline">Resets daily. Today only counts once.</p>
      </div>
      <button class="reset-btn" id="reset">Reset</button>
    </header>

    <div class="bars">
      <div class="bar">
        <div class="fill" id="main-fill"></div>
        <div class="caption" id="main-caption">Main Protocol: 0%</div>
      </div>
      <div class="bar side">
        <div class="fill" id="side-fill"></div>
        <div class="caption" id="side-caption">Side Quests: 0/4</div>
      </div>
    </div>

    <section>
      <h2>The Physical Standard</h2>
      <button class="check" id="steps">
        <span class="box"></span>
        <span>10k Steps</span>
      </button>
      <div class="water-row">
        <span class="label">Water (4L)</span>
        <div class="glasses" id="glasses"></div>
      </div>
    </section>

    <section>
      <h2>Daily Non-Negotiables</h2>
      <div id="habits" style="display: grid; gap: 10px;"></div>
    </section>

    <section class="side-quests">
      <h2>Side Quest Rewards</h2>
      <div id="side-quests" style="display: grid; gap: 10px;"></div>
    </section>

    <footer>Designed for the 2.0 version of you.</footer>
  </main>

  <script>
    const DAILY_HABITS = [
      { key: 'coldShower', label: 'Cold Shower' },
      { key: 'creatine', label: 'Take Creatine' },
      { key: 'protein', label: 'Protein Intake' },
      { key: 'noSugar', label: 'Zero Added Sugar' },
      { key: 'study', label: '15 Min Study' }
    ];

    const SIDE_QUESTS = [
      { key: 'skincare', label: 'Moisturize & Sunscreen' },
      { key: 'noSwiggy', label: 'No Swiggy' },
      { key: 'noNailBiting', label: 'No Nail Biting' },
      { key: 'reading', label: 'Read 5-10 Pages' }
    ];

    const WATER_GOAL = 4;
    const STEP_GOAL = 10000;

    let today = {{BOOTSTRAP}};

    const stepsBtn = document.getElementById('steps');
    const glassesEl = document.getElementById('glasses');
    const habitsEl = document.getElementById('habits');
    const sideQuestsEl = document.getElementById('side-quests');

    const post = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body || {})
      });
      if (!res.ok) {
        throw new Error(await res.text());
      }
      today = await res.json();
      render();
    };

    const makeCheck = (parent, item, path) => {
      const button = document.createElement('button');
      button.className = 'check';
      button.dataset.key = item.key;
      const box = document.createElement('span');
      box.className = 'box';
      const label = document.createElement('span');
      label.textContent = item.label;
      button.append(box, label);
      button.addEventListener('click', () => {
        post(path, { key: item.key }).catch(console.error);
      });
      parent.appendChild(button);
      return button;
    };

    const habitButtons = DAILY_HABITS.map((item) => makeCheck(habitsEl, item, '/api/habit'));
    const sideQuestButtons = SIDE_QUESTS.map((item) => makeCheck(sideQuestsEl, item, '/api/side-quest'));

    const glassButtons = [];
    for (let glass = 1; glass <= WATER_GOAL; glass += 1) {
      const button = document.createElement('button');
      button.className = 'glass';
      button.addEventListener('click', () => {
        post('/api/water', { glass }).catch(console.error);
      });
      glassesEl.appendChild(button);
      glassButtons.push(button);
    }

    stepsBtn.addEventListener('click', () => {
      post('/api/steps', { target: STEP_GOAL }).catch(console.error);
    });

    document.getElementById('reset').addEventListener('click', () => {
      post('/api/reset').catch(console.error);
    });

    const setCheck = (button, done) => {
      button.classList.toggle('done', done);
      button.querySelector('.box').textContent = done ? '✓' : '';
    };

    const render = () => {
      document.getElementById('main-fill').style.width = Math.min(today.mainProtocolPercent, 100) + '%';
      document.getElementById('main-caption').textContent = 'Main Protocol: ' + today.mainProtocolPercent + '%';

      const sideDone = SIDE_QUESTS.filter((item) => today.sideQuests[item.key]).length;
      document.getElementById('side-fill').style.width = today.sideQuestPercent + '%';
      document.getElementById('side-caption').textContent = 'Side Quests: ' + sideDone + '/' + SIDE_QUESTS.length;

      setCheck(stepsBtn, today.steps >= STEP_GOAL);
      glassButtons.forEach((button, index) => {
        button.classList.toggle('filled', today.waterCount >= index + 1);
      });
      habitButtons.forEach((button) => setCheck(button, today.dailyHabits[button.dataset.key]));
      sideQuestButtons.forEach((button) => setCheck(button, today.sideQuests[button.dataset.key]));
    };

    render();
  </script>
</body>
</html>
"#;

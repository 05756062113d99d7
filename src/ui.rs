pub fn render_index() -> &'static str {
    INDEX_HTML
}

pub fn render_login() -> &'static str {
    LOGIN_HTML
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Medicine Tracker</title>
  <style>
    :root {
      --bg: #f1f3fb;
      --ink: #26283a;
      --muted: #6b6f88;
      --accent: #667eea;
      --taken: #4caf50;
      --missed: #f44336;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(38, 40, 58, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, #e6e9ff, var(--bg) 55%);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      padding: 28px 16px 48px;
    }

    .app {
      width: min(960px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 22px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      flex-wrap: wrap;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-size: 1.8rem;
    }

    .tabs {
      display: flex;
      gap: 8px;
      flex-wrap: wrap;
    }

    .tab {
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      background: rgba(102, 126, 234, 0.12);
      color: var(--accent);
      font-weight: 600;
      cursor: pointer;
    }

    .tab.active {
      background: var(--accent);
      color: #fff;
    }

    .panel {
      display: none;
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    .panel.active {
      display: grid;
      gap: 18px;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
      gap: 14px;
    }

    .card {
      border: 1px solid #e3e5f3;
      border-radius: 14px;
      padding: 14px;
      display: grid;
      gap: 6px;
    }

    .card h3 {
      margin: 0;
    }

    .card p {
      margin: 0;
      color: var(--muted);
    }

    .row {
      display: flex;
      gap: 8px;
      flex-wrap: wrap;
    }

    button.small {
      border: none;
      border-radius: 8px;
      padding: 6px 12px;
      cursor: pointer;
      color: #fff;
      background: var(--accent);
    }

    button.taken {
      background: var(--taken);
    }

    button.missed,
    button.delete {
      background: var(--missed);
    }

    form {
      display: grid;
      gap: 12px;
      max-width: 420px;
    }

    input,
    select {
      padding: 10px;
      border-radius: 10px;
      border: 1px solid #d5d8ea;
      font-size: 1rem;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 12px;
    }

    .stat {
      background: rgba(102, 126, 234, 0.08);
      border-radius: 14px;
      padding: 12px;
      display: grid;
      gap: 4px;
    }

    .stat .label {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 700;
    }

    .history-item {
      border-left: 4px solid var(--taken);
      padding: 8px 12px;
      background: #fafbff;
      border-radius: 8px;
    }

    .history-item.missed {
      border-left-color: var(--missed);
    }

    svg {
      width: 100%;
      height: auto;
    }

    .chart-label {
      font-size: 11px;
      fill: var(--muted);
    }

    .chart-grid {
      stroke: #e3e5f3;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-legend {
      font-size: 13px;
      fill: var(--ink);
    }

    .insight {
      padding: 10px 14px;
      border-radius: 12px;
      background: #f6f7ff;
    }

    .insight p {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .empty {
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: var(--missed);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>💊 Medicine Tracker</h1>
      <span id="user-name" class="empty"></span>
      <nav class="tabs">
        <button class="tab active" type="button" data-tab="dashboard">Dashboard</button>
        <button class="tab" type="button" data-tab="add">Add medicine</button>
        <button class="tab" type="button" data-tab="history">History</button>
        <button class="tab" type="button" data-tab="analytics">Analytics</button>
      </nav>
    </header>

    <section class="panel active" id="dashboard">
      <h2>Today's schedule</h2>
      <div class="cards" id="today-schedule"></div>
      <h2>All medicines</h2>
      <div class="cards" id="all-medicines"></div>
    </section>

    <section class="panel" id="add">
      <h2 id="form-title">Add medicine</h2>
      <form id="medicine-form">
        <input id="pill-name" placeholder="Medicine name" required />
        <input id="dosage" placeholder="Dosage (e.g. 500mg)" required />
        <input id="time" type="time" required />
        <select id="frequency">
          <option value="daily">Daily</option>
          <option value="twice-daily">Twice daily</option>
          <option value="thrice-daily">Thrice daily</option>
          <option value="weekly">Weekly</option>
          <option value="as-needed">As needed</option>
        </select>
        <button class="small" type="submit">Save</button>
      </form>
    </section>

    <section class="panel" id="history">
      <div class="row">
        <button class="small" type="button" data-filter="all">All</button>
        <button class="small taken" type="button" data-filter="taken">Taken</button>
        <button class="small missed" type="button" data-filter="missed">Missed</button>
      </div>
      <div id="history-log"></div>
    </section>

    <section class="panel" id="analytics">
      <div class="stats">
        <div class="stat"><span class="label">Adherence</span><span class="value" id="adherence-rate">0%</span></div>
        <div class="stat"><span class="label">Taken</span><span class="value" id="doses-taken">0</span></div>
        <div class="stat"><span class="label">Missed</span><span class="value" id="doses-missed">0</span></div>
        <div class="stat"><span class="label">Active medicines</span><span class="value" id="active-medicines">0</span></div>
      </div>
      <h3>Taken vs missed</h3>
      <svg id="split-chart" viewBox="0 0 600 240" role="img" aria-label="Taken and missed doses"></svg>
      <h3>Last 7 days</h3>
      <svg id="weekly-chart" viewBox="0 0 600 240" role="img" aria-label="Taken and missed per day"></svg>
      <h3>Adherence rate, last 14 days</h3>
      <svg id="rate-chart" viewBox="0 0 600 240" role="img" aria-label="Adherence rate per day"></svg>
      <h3>Medicines by frequency</h3>
      <svg id="frequency-chart" viewBox="0 0 600 240" role="img" aria-label="Medicines by frequency"></svg>
      <h3>Insights</h3>
      <div id="insights-list"></div>
    </section>

    <div class="status" id="status"></div>
  </main>
  <script>
    const statusEl = document.getElementById('status');
    const form = document.getElementById('medicine-form');
    let editingId = null;
    let historyFilter = 'all';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
      })[ch]);

    const api = async (path, options = {}) => {
      const response = await fetch(path, {
        headers: { 'Content-Type': 'application/json' },
        ...options
      });
      if (!response.ok) {
        throw new Error(await response.text() || response.statusText);
      }
      return response.status === 204 ? null : response.json();
    };

    const medicineCard = (medicine, pending) => `
      <div class="card">
        <h3>${escapeHtml(medicine.name)}</h3>
        <p><strong>Dosage:</strong> ${escapeHtml(medicine.dosage)}</p>
        <p><strong>Time:</strong> ${medicine.time}</p>
        <p><strong>Frequency:</strong> ${medicine.frequency}</p>
        <div class="row">
          ${pending
            ? `<button class="small taken" data-dose="taken" data-id="${medicine.id}">✓ Taken</button>
               <button class="small missed" data-dose="missed" data-id="${medicine.id}">✗ Missed</button>`
            : `<button class="small" data-edit="${medicine.id}">Edit</button>
               <button class="small delete" data-delete="${medicine.id}">Delete</button>`}
        </div>
      </div>`;

    const loadDashboard = async () => {
      const [pending, all] = await Promise.all([api('/api/schedule'), api('/api/medicines')]);
      const scheduleEl = document.getElementById('today-schedule');
      const allEl = document.getElementById('all-medicines');
      if (!all.length) {
        scheduleEl.innerHTML = '<p class="empty">No medicines scheduled yet. Add your first medicine!</p>';
        allEl.innerHTML = '';
        return all;
      }
      scheduleEl.innerHTML = pending.length
        ? pending.map((medicine) => medicineCard(medicine, true)).join('')
        : '<p class="empty">All done for today!</p>';
      allEl.innerHTML = all.map((medicine) => medicineCard(medicine, false)).join('');
      return all;
    };

    const loadHistory = async () => {
      const entries = await api(`/api/history?status=${historyFilter}`);
      const logEl = document.getElementById('history-log');
      if (!entries.length) {
        logEl.innerHTML = '<p class="empty">No history yet. Start tracking your medicines!</p>';
        return;
      }
      logEl.innerHTML = entries
        .map((entry) => {
          const recorded = new Date(entry.recorded_at);
          return `
            <div class="history-item ${entry.status}">
              <strong>${escapeHtml(entry.medicine_name)}</strong> · ${entry.status.toUpperCase()}
              <div class="empty">${escapeHtml(entry.dosage)} · scheduled ${entry.time} · recorded ${recorded.toLocaleString()}</div>
            </div>`;
        })
        .join('');
    };

    const shortDay = (date) =>
      new Date(`${date}T00:00:00`).toLocaleDateString('en-US', { weekday: 'short' });
    const shortDate = (date) =>
      new Date(`${date}T00:00:00`).toLocaleDateString('en-US', { month: 'short', day: 'numeric' });

    const renderBars = (svg, buckets) => {
      const width = 600;
      const height = 240;
      const padding = 32;
      const max = Math.max(1, ...buckets.map((b) => Math.max(b.taken, b.missed)));
      const slot = (width - padding * 2) / buckets.length;
      const barWidth = slot / 3;
      const scale = (height - padding * 2) / max;
      svg.innerHTML = buckets
        .map((bucket, index) => {
          const x = padding + index * slot;
          const takenHeight = bucket.taken * scale;
          const missedHeight = bucket.missed * scale;
          return `
            <rect x="${x + barWidth * 0.5}" y="${height - padding - takenHeight}" width="${barWidth}" height="${takenHeight}" fill="#4caf50" rx="3" />
            <rect x="${x + barWidth * 1.5}" y="${height - padding - missedHeight}" width="${barWidth}" height="${missedHeight}" fill="#f44336" rx="3" />
            <text class="chart-label" x="${x + slot / 2}" y="${height - padding + 16}" text-anchor="middle">${shortDay(bucket.date)}</text>`;
        })
        .join('');
    };

    const renderRateLine = (svg, buckets) => {
      const width = 600;
      const height = 240;
      const padding = 36;
      const step = (width - padding * 2) / Math.max(1, buckets.length - 1);
      const y = (rate) => height - padding - (rate / 100) * (height - padding * 2);
      const path = buckets
        .map((bucket, index) => `${index === 0 ? 'M' : 'L'} ${padding + index * step} ${y(bucket.adherence_rate)}`)
        .join(' ');
      let grid = '';
      for (let rate = 0; rate <= 100; rate += 25) {
        grid += `<line class="chart-grid" x1="${padding}" y1="${y(rate)}" x2="${width - padding}" y2="${y(rate)}" />`;
        grid += `<text class="chart-label" x="${padding - 6}" y="${y(rate) + 4}" text-anchor="end">${rate}%</text>`;
      }
      const labels = buckets
        .map((bucket, index) => index % 2 === 0
          ? `<text class="chart-label" x="${padding + index * step}" y="${height - padding + 16}" text-anchor="middle">${shortDate(bucket.date)}</text>`
          : '')
        .join('');
      svg.innerHTML = `${grid}<path class="chart-line" d="${path}" />${labels}`;
    };

    const sliceColors = ['#667eea', '#4caf50', '#ff9800', '#f44336', '#2196f3'];

    const arcPath = (cx, cy, outer, inner, start, end) => {
      const point = (radius, angle) =>
        `${(cx + radius * Math.cos(angle)).toFixed(2)} ${(cy + radius * Math.sin(angle)).toFixed(2)}`;
      const large = end - start > Math.PI ? 1 : 0;
      const outerArc = `M ${point(outer, start)} A ${outer} ${outer} 0 ${large} 1 ${point(outer, end)}`;
      if (inner === 0) {
        return `${outerArc} L ${cx} ${cy} Z`;
      }
      return `${outerArc} L ${point(inner, end)} A ${inner} ${inner} 0 ${large} 0 ${point(inner, start)} Z`;
    };

    const renderSlices = (svg, slices, innerRatio) => {
      const total = slices.reduce((sum, slice) => sum + slice.value, 0);
      if (!total) {
        svg.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }
      const cx = 170;
      const cy = 120;
      const outer = 100;
      const inner = outer * innerRatio;
      let angle = -Math.PI / 2;
      const shapes = slices
        .filter((slice) => slice.value > 0)
        .map((slice) => {
          const sweep = (slice.value / total) * Math.PI * 2;
          const start = angle;
          angle += sweep;
          if (sweep >= Math.PI * 2 - 1e-9) {
            const ring = inner > 0
              ? `<circle cx="${cx}" cy="${cy}" r="${(outer + inner) / 2}" fill="none" stroke="${slice.color}" stroke-width="${outer - inner}" />`
              : `<circle cx="${cx}" cy="${cy}" r="${outer}" fill="${slice.color}" />`;
            return ring;
          }
          return `<path d="${arcPath(cx, cy, outer, inner, start, angle)}" fill="${slice.color}" stroke="#fff" stroke-width="2" />`;
        })
        .join('');
      const legend = slices
        .map((slice, index) => {
          const y = 60 + index * 26;
          const percent = Math.round((slice.value / total) * 100);
          return `
            <rect x="330" y="${y - 12}" width="14" height="14" rx="3" fill="${slice.color}" />
            <text class="chart-legend" x="352" y="${y}">${escapeHtml(slice.label)}: ${slice.value} (${percent}%)</text>`;
        })
        .join('');
      svg.innerHTML = `${shapes}${legend}`;
    };

    const renderPie = (svg, summary) =>
      renderSlices(svg, [
        { label: 'Taken', value: summary.taken_count, color: '#4caf50' },
        { label: 'Missed', value: summary.missed_count, color: '#f44336' }
      ], 0);

    const renderDoughnut = (svg, distribution) =>
      renderSlices(svg, distribution.map((entry, index) => ({
        label: entry.label,
        value: entry.count,
        color: sliceColors[index % sliceColors.length]
      })), 0.55);

    const loadAnalytics = async () => {
      const data = await api('/api/analytics');
      document.getElementById('adherence-rate').textContent = `${data.summary.adherence_rate}%`;
      document.getElementById('doses-taken').textContent = data.summary.taken_count;
      document.getElementById('doses-missed').textContent = data.summary.missed_count;
      document.getElementById('active-medicines').textContent = data.active_medicines;
      renderBars(document.getElementById('weekly-chart'), data.weekly_trend);
      renderRateLine(document.getElementById('rate-chart'), data.adherence_trend);
      renderPie(document.getElementById('split-chart'), data.summary);
      renderDoughnut(document.getElementById('frequency-chart'), data.frequency_distribution);
      document.getElementById('insights-list').innerHTML = data.insights
        .map((insight) => `
          <div class="insight">
            <strong>${insight.icon} ${escapeHtml(insight.title)}</strong>
            <p>${escapeHtml(insight.description)}</p>
          </div>`)
        .join('');
    };

    const loaders = { dashboard: loadDashboard, history: loadHistory, analytics: loadAnalytics };

    const showTab = (name) => {
      document.querySelectorAll('.tab').forEach((tab) => tab.classList.toggle('active', tab.dataset.tab === name));
      document.querySelectorAll('.panel').forEach((panel) => panel.classList.toggle('active', panel.id === name));
      const loader = loaders[name];
      if (loader) {
        loader().catch((err) => setStatus(err.message, 'error'));
      }
    };

    document.querySelectorAll('.tab').forEach((tab) =>
      tab.addEventListener('click', () => showTab(tab.dataset.tab)));

    document.querySelectorAll('[data-filter]').forEach((button) =>
      button.addEventListener('click', () => {
        historyFilter = button.dataset.filter;
        loadHistory().catch((err) => setStatus(err.message, 'error'));
      }));

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      const payload = {
        name: document.getElementById('pill-name').value,
        dosage: document.getElementById('dosage').value,
        time: document.getElementById('time').value,
        frequency: document.getElementById('frequency').value
      };
      try {
        if (editingId) {
          await api(`/api/medicines/${editingId}`, { method: 'PUT', body: JSON.stringify(payload) });
        } else {
          await api('/api/medicines', { method: 'POST', body: JSON.stringify(payload) });
        }
        editingId = null;
        document.getElementById('form-title').textContent = 'Add medicine';
        form.reset();
        setStatus('Medicine saved.');
        showTab('dashboard');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('dashboard').addEventListener('click', async (event) => {
      const target = event.target;
      try {
        if (target.dataset.dose) {
          const entry = await api(`/api/medicines/${target.dataset.id}/doses`, {
            method: 'POST',
            body: JSON.stringify({ status: target.dataset.dose })
          });
          setStatus(`Marked ${entry.medicine_name} as ${entry.status}.`);
          await loadDashboard();
        } else if (target.dataset.delete) {
          if (!window.confirm('Are you sure you want to delete this medicine?')) {
            return;
          }
          await api(`/api/medicines/${target.dataset.delete}`, { method: 'DELETE' });
          await loadDashboard();
        } else if (target.dataset.edit) {
          const all = await api('/api/medicines');
          const medicine = all.find((m) => String(m.id) === target.dataset.edit);
          if (medicine) {
            editingId = medicine.id;
            document.getElementById('pill-name').value = medicine.name;
            document.getElementById('dosage').value = medicine.dosage;
            document.getElementById('time').value = medicine.time;
            document.getElementById('frequency').value = medicine.frequency;
            document.getElementById('form-title').textContent = 'Edit medicine';
            showTab('add');
          }
        }
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    const notify = (title, body) => {
      if (!('Notification' in window)) {
        setStatus(`${title}: ${body}`);
        return;
      }
      if (Notification.permission === 'granted') {
        new Notification(title, { body });
      } else {
        setStatus(`${title}: ${body}`);
      }
    };

    if ('Notification' in window && Notification.permission === 'default') {
      Notification.requestPermission();
    }

    const checkReminders = async () => {
      try {
        const due = await api('/api/reminders');
        due.forEach((medicine) => notify('⏰ Medicine Reminder', `Time to take ${medicine.name} ${medicine.dosage}`));
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const user = JSON.parse(sessionStorage.getItem('currentUser') || 'null');
    if (user) {
      document.getElementById('user-name').textContent = `👤 ${user.name}`;
    }

    loadDashboard().catch((err) => setStatus(err.message, 'error'));
    setInterval(checkReminders, 60000);
  </script>
</body>
</html>
"##;

const LOGIN_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Medicine Tracker · Log in</title>
  <style>
    body {
      margin: 0;
      min-height: 100vh;
      display: grid;
      place-items: center;
      background: linear-gradient(160deg, #e6e9ff, #f1f3fb 55%);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      color: #26283a;
    }

    .box {
      width: min(380px, 92vw);
      background: #fff;
      border-radius: 20px;
      box-shadow: 0 18px 40px rgba(38, 40, 58, 0.12);
      padding: 28px;
      display: grid;
      gap: 16px;
    }

    .toggle {
      display: flex;
      gap: 8px;
    }

    .toggle button {
      flex: 1;
      border: none;
      border-radius: 999px;
      padding: 8px;
      background: rgba(102, 126, 234, 0.12);
      color: #667eea;
      font-weight: 600;
      cursor: pointer;
    }

    .toggle button.active {
      background: #667eea;
      color: #fff;
    }

    form {
      display: none;
      gap: 10px;
    }

    form.active {
      display: grid;
    }

    input {
      padding: 10px;
      border-radius: 10px;
      border: 1px solid #d5d8ea;
    }

    button[type="submit"] {
      border: none;
      border-radius: 10px;
      padding: 10px;
      background: #667eea;
      color: #fff;
      cursor: pointer;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
    }

    .status[data-type="error"] {
      color: #f44336;
    }

    .hint {
      color: #6b6f88;
      font-size: 0.85rem;
      margin: 0;
    }
  </style>
</head>
<body>
  <main class="box">
    <h1>💊 Medicine Tracker</h1>
    <div class="toggle">
      <button type="button" class="active" data-form="login-form">Log in</button>
      <button type="button" data-form="signup-form">Sign up</button>
    </div>
    <form id="login-form" class="active">
      <input id="login-email" type="email" placeholder="Email" required />
      <input id="login-password" type="password" placeholder="Password" required />
      <button type="submit">Log in</button>
    </form>
    <form id="signup-form">
      <input id="signup-name" placeholder="Name" required />
      <input id="signup-email" type="email" placeholder="Email" required />
      <input id="signup-password" type="password" placeholder="Password" required />
      <input id="signup-confirm" type="password" placeholder="Confirm password" required />
      <button type="submit">Create account</button>
    </form>
    <div class="status" id="status"></div>
    <p class="hint">Demo account: demo@example.com / demo123</p>
  </main>
  <script>
    const statusEl = document.getElementById('status');
    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const show = (id) => {
      document.querySelectorAll('form').forEach((f) => f.classList.toggle('active', f.id === id));
      document.querySelectorAll('.toggle button').forEach((b) => b.classList.toggle('active', b.dataset.form === id));
    };

    document.querySelectorAll('.toggle button').forEach((button) =>
      button.addEventListener('click', () => show(button.dataset.form)));

    const post = async (path, payload) => {
      const response = await fetch(path, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(payload)
      });
      if (!response.ok) {
        throw new Error(await response.text() || response.statusText);
      }
      return response.json();
    };

    document.getElementById('login-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      try {
        const user = await post('/api/login', {
          email: document.getElementById('login-email').value,
          password: document.getElementById('login-password').value
        });
        sessionStorage.setItem('currentUser', JSON.stringify(user));
        window.location.href = '/';
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('signup-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      try {
        await post('/api/signup', {
          name: document.getElementById('signup-name').value,
          email: document.getElementById('signup-email').value,
          password: document.getElementById('signup-password').value,
          confirm_password: document.getElementById('signup-confirm').value
        });
        event.target.reset();
        setStatus('Account created. Please log in.');
        show('login-form');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });
  </script>
</body>
</html>
"##;

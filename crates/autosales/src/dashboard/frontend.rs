//! Embedded single-page frontend.

/// Placeholder replaced with the configured page title.
const TITLE_PLACEHOLDER: &str = "{{TITLE}}";

/// Render the page with the given browser title.
pub fn render(title: &str) -> String {
    FRONTEND_HTML.replace(TITLE_PLACEHOLDER, &escape_html(title))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Embedded frontend HTML with CSS and JavaScript
const FRONTEND_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{TITLE}}</title>
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
    <style>
        body {
            font-family: "Open Sans", -apple-system, BlinkMacSystemFont, sans-serif;
            margin: 0;
            padding: 16px;
            background: #ffffff;
        }

        h1 {
            text-align: center;
            color: #503D36;
            font-size: 24px;
        }

        .control {
            margin: 8px 0;
        }

        .control label {
            display: block;
            margin-bottom: 4px;
        }

        .control select {
            width: 80%;
            padding: 2px;
            font-size: 20px;
            text-align: center;
        }

        .control select:disabled {
            background: #eeeeee;
            color: #999999;
        }

        #output-container {
            display: flex;
            flex-direction: column;
        }

        .chart-row {
            display: flex;
            flex-wrap: wrap;
        }

        .chart-item {
            flex: 1 1 480px;
            min-height: 450px;
        }

        .error {
            color: #b00020;
            text-align: center;
        }
    </style>
</head>
<body>
    <h1>Automobile Sales Statistics Dashboard</h1>

    <div class="control">
        <label for="dropdown-statistics">Select Statistics:</label>
        <select id="dropdown-statistics">
            <option value="" selected>Select a report type.</option>
        </select>
    </div>

    <div class="control">
        <label for="select-year">Select a Year:</label>
        <select id="select-year" disabled>
            <option value="" selected>Select a year.</option>
        </select>
    </div>

    <div>
        <div id="output-container" class="chart-grid"></div>
    </div>

    <script>
        const statisticsSelect = document.getElementById('dropdown-statistics');
        const yearSelect = document.getElementById('select-year');
        const output = document.getElementById('output-container');

        function addOptions(select, options) {
            for (const option of options) {
                const el = document.createElement('option');
                el.value = option.value;
                el.textContent = option.label;
                select.appendChild(el);
            }
        }

        async function loadOptions() {
            const response = await fetch('/api/options');
            const options = await response.json();
            addOptions(statisticsSelect, options.statistics);
            addOptions(yearSelect, options.years);
        }

        async function updateControls() {
            const params = new URLSearchParams();
            if (statisticsSelect.value) {
                params.set('statistics', statisticsSelect.value);
            }
            const response = await fetch('/api/controls?' + params);
            const controls = await response.json();
            yearSelect.disabled = controls.year_disabled;
        }

        function renderGrid(grid) {
            for (const el of output.querySelectorAll('.chart-item')) {
                Plotly.purge(el);
            }
            output.replaceChildren();

            for (const row of grid.rows) {
                const rowEl = document.createElement('div');
                rowEl.className = row.class_name;
                output.appendChild(rowEl);

                for (const item of row.items) {
                    const itemEl = document.createElement('div');
                    itemEl.className = item.class_name;
                    itemEl.id = item.id;
                    rowEl.appendChild(itemEl);
                    Plotly.newPlot(itemEl, item.figure.data, item.figure.layout, {responsive: true});
                }
            }
        }

        async function updateOutput() {
            const params = new URLSearchParams();
            if (statisticsSelect.value) {
                params.set('statistics', statisticsSelect.value);
            }
            if (yearSelect.value) {
                params.set('year', yearSelect.value);
            }

            const response = await fetch('/api/output?' + params);
            if (!response.ok) {
                output.replaceChildren();
                const message = document.createElement('p');
                message.className = 'error';
                message.textContent = await response.text();
                output.appendChild(message);
                return;
            }
            renderGrid(await response.json());
        }

        statisticsSelect.addEventListener('change', async () => {
            await updateControls();
            await updateOutput();
        });
        yearSelect.addEventListener('change', updateOutput);

        loadOptions().then(updateControls);
    </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sets_title() {
        let html = render("Automobile Statistics Dashboard");
        assert!(html.contains("<title>Automobile Statistics Dashboard</title>"));
        assert!(!html.contains(TITLE_PLACEHOLDER));
    }

    #[test]
    fn test_render_has_controls() {
        let html = render("t");
        assert!(html.contains("Automobile Sales Statistics Dashboard"));
        assert!(html.contains(r#"id="dropdown-statistics""#));
        assert!(html.contains(r#"id="select-year""#));
        assert!(html.contains(r#"id="output-container""#));
        assert!(html.contains("Select a report type."));
        assert!(html.contains("Select a year."));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render("<b>Sales</b>");
        assert!(html.contains("<title>&lt;b&gt;Sales&lt;/b&gt;</title>"));
    }
}

//! Static HTML scaffolding for gallery pages. The page composer fills the
//! placeholders; figures arrive as inline Plotly divs.

pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<script src="https://cdn.plot.ly/plotly-2.27.0.min.js"></script>
<style>
/* __STYLES__ */
</style>
</head>
<body>
<!-- __BODY__ -->
<script>
/* __SCRIPT__ */
</script>
</body>
</html>
"#;

pub const PAGE_CSS: &str = r#"
body {
  font-family: "Helvetica Neue", Helvetica, Arial, sans-serif;
  margin: 16px;
  color: #222;
}
.vg-row {
  display: flex;
  flex-direction: row;
  flex-wrap: wrap;
  gap: 12px;
  align-items: flex-start;
}
.vg-column {
  display: flex;
  flex-direction: column;
  gap: 12px;
}
.vg-figure {
  flex: 0 0 auto;
}
.vg-text {
  max-width: 860px;
  line-height: 1.4;
}
.vg-tab-bar {
  display: flex;
  gap: 4px;
  border-bottom: 1px solid #ccc;
  margin-bottom: 8px;
}
.vg-tab-button {
  border: 1px solid #ccc;
  border-bottom: none;
  border-radius: 4px 4px 0 0;
  background: #f4f4f4;
  padding: 6px 14px;
  cursor: pointer;
  font-size: 14px;
}
.vg-tab-button.active {
  background: #fff;
  font-weight: bold;
}
.vg-tab-pane {
  display: none;
}
.vg-tab-pane.active {
  display: block;
}
"#;

pub const TABS_JS: &str = r#"
function vgShowTab(groupId, index) {
  var group = document.getElementById(groupId);
  if (!group) { return; }
  var panes = group.querySelectorAll(':scope > .vg-tab-pane');
  var buttons = group.querySelectorAll(':scope > .vg-tab-bar > .vg-tab-button');
  for (var i = 0; i < panes.length; i++) {
    panes[i].classList.toggle('active', i === index);
  }
  for (var i = 0; i < buttons.length; i++) {
    buttons[i].classList.toggle('active', i === index);
  }
}
"#;

use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(LAYOUT_CSS)) }
                script src=(HTMX_SRC) defer {};
            }
            body {
              header class="site-header" {
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#524ed2"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                      class="icon icon-tabler icon-tabler-school"
                  {
                      path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                      path d="M22 9l-10 -4l-10 4l10 4l10 -4v6" {}
                      path d="M6 10.6v5.4a6 3 0 0 0 12 0v-5.4" {}
                  }
                  h3 { "Scholarships" }
                  nav {
                      ul {
                          li { a href="/" { "Programs" } }
                      }
                  }
              }
                (content)
            }
        }
    }
}

const LAYOUT_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
.site-header { display: flex; align-items: center; gap: 12px; padding: 12px 24px; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.site-header nav ul { list-style: none; display: flex; gap: 16px; margin: 0; padding: 0; }
.container { max-width: 1400px; margin: 0 auto; padding: 24px; }
.page-title { display: flex; align-items: center; margin-bottom: 40px; }
.page-title h1 { flex-grow: 1; margin: 0; }
.card { border-radius: 12px; box-shadow: 0 1px 4px rgba(0,0,0,.12); overflow: hidden; }
.card-body { padding: 16px 24px; }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0, 0, 0, 0); }
.btn { padding: 8px 16px; border: none; border-radius: 8px; background: #1f2937; color: #fff; cursor: pointer; }
.search input { width: 100%; padding: 8px; border-radius: 4px; border: 1px solid #ccc; box-sizing: border-box; }
.table-scroll { overflow-x: auto; }
.programs { min-width: 800px; border-collapse: collapse; }
.programs th, .programs td { padding: 6px 8px; vertical-align: top; text-align: left; }
.empty-row td { text-align: center; padding: 16px; }
.spinner-box { display: flex; justify-content: center; padding: 40px 0; }
.spinner { width: 40px; height: 40px; border: 4px solid #e5e7eb; border-top-color: #524ed2; border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.pagination { display: flex; justify-content: flex-end; align-items: center; gap: 24px; padding: 8px 16px; }
.pagination a.disabled { color: #9ca3af; pointer-events: none; }
"#;

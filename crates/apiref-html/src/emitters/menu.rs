use minijinja::{Environment, context};

use apiref_core::menu::MenuView;

/// Emit the menu fragment: a heading per section, a row per visible
/// resource, and the anchor-link list of each visible resource's operations.
pub fn emit_menu(view: &MenuView) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    // Registered under an .html name so minijinja auto-escapes values
    env.add_template("menu.html", include_str!("../../templates/menu.html.j2"))?;
    let tmpl = env.get_template("menu.html")?;
    tmpl.render(context! { sections => &view.sections })
}

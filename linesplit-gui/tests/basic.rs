#[test]
fn gui_config_defaults() {
    let config = linesplit_gui::GuiConfig::default();
    assert_eq!(config.title, "Line Splitter");
    assert_eq!(config.width, 760.0);
    assert_eq!(config.height, 540.0);
}

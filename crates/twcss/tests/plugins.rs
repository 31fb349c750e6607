use twcss::{ConfigError, PluginApi, TailwindConfig, UtilityCompiler, Variant};

fn border_custom(api: &mut PluginApi<'_>) -> twcss::Result<()> {
    let utilities: toml::Value = toml::from_str(r#"".border-custom" = { border = "2px solid" }"#)?;
    api.add_utilities(&utilities)
}

#[test]
fn plugin_utility_resolves_with_and_without_variant() {
    let config = TailwindConfig::new().with_plugin(border_custom);
    let compiler = UtilityCompiler::from_config(&config).unwrap();

    let compiled = compiler.compile("border-custom sm:border-custom");
    assert_eq!(compiled[0].declarations[0].to_string(), "border:2px solid");
    assert_eq!(compiled[0].declarations[0].variant, None);
    assert_eq!(compiled[1].declarations[0].to_string(), "border:2px solid");
    assert_eq!(compiled[1].declarations[0].variant, Some(Variant::Screen("sm".into())));
}

#[test]
fn plugins_see_the_merged_theme() {
    let config = TailwindConfig::new()
        .with_extend("colors", twcss::ThemeValue::map([("brand", "#0b7bb5")]))
        .with_plugin(|api: &mut PluginApi<'_>| {
            let brand = api.theme("colors", "brand").unwrap_or("black").to_string();
            api.add_utility("btn-brand", [("backgroundColor", brand), ("color", "#fff".to_string())])
        });
    let compiler = UtilityCompiler::from_config(&config).unwrap();

    let compiled = compiler.compile("btn-brand");
    let rendered: Vec<_> = compiled[0].declarations.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["background-color:#0b7bb5", "color:#fff"]);
}

#[test]
fn later_plugins_win_on_collision() {
    let config = TailwindConfig::new()
        .with_plugin(|api: &mut PluginApi<'_>| api.add_utility("card", [("padding", "8px")]))
        .with_plugin(|api: &mut PluginApi<'_>| api.add_utility("card", [("padding", "16px")]));
    let compiler = UtilityCompiler::from_config(&config).unwrap();

    assert_eq!(compiler.registry().len(), 1);
    assert_eq!(compiler.compile("card")[0].declarations[0].value, "16px");
}

#[test]
fn plugins_shadow_builtins() {
    let config = TailwindConfig::new()
        .with_plugin(|api: &mut PluginApi<'_>| api.add_utilities_css(".flex { display: table }"));
    let compiler = UtilityCompiler::from_config(&config).unwrap();

    assert_eq!(compiler.compile("flex")[0].declarations[0].value, "table");
}

#[test]
fn malformed_registration_fails_fast() {
    let config = TailwindConfig::new()
        .with_plugin(|api: &mut PluginApi<'_>| api.add_utilities(&toml::Value::Array(Vec::new())));

    let err = UtilityCompiler::from_config(&config).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPlugin(_)));
}

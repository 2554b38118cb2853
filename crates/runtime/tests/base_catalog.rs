use factory_content::{BaseMod, ContentFactory, ItemLoader};
use factory_core::{Energy, HostConfig, ItemId, ItemRegistry, Mod, RegistryError};
use factory_runtime::{HostError, ItemRegistryImpl, LoadState, ModHost};

const BASE_NAMES: [&str; 13] = [
    "log",
    "iron-ore",
    "copper-ore",
    "coal",
    "stone",
    "copper-ingot",
    "copper-sheet",
    "steel-ingot",
    "steel-sheet",
    "brick",
    "copper-wire",
    "circuit-board",
    "pipe",
];

#[test]
fn base_mod_fills_fresh_registry() {
    let mut host = ModHost::new(ItemRegistryImpl::new()).with_mod(BaseMod::new());
    host.load().expect("base mod should load");

    let registry = host.registry();
    let names: Vec<_> = registry.iter().map(|(_, def)| def.name.as_str()).collect();
    assert_eq!(names, BASE_NAMES);

    let ids: Vec<_> = registry.iter().map(|(id, _)| id.0).collect();
    assert_eq!(ids, (1..=13).collect::<Vec<_>>());

    assert_eq!(registry.by_name("copper-wire").unwrap().parts.len(), 3);
    for (_, def) in registry.iter().filter(|(_, def)| def.name != "copper-wire") {
        assert_eq!(def.parts.len(), 1, "{}", def.name);
    }
}

#[test]
fn mining_and_fuel_from_base() {
    let mut host = ModHost::new(ItemRegistryImpl::new()).with_mod(BaseMod::new());
    host.load().unwrap();
    let registry = host.registry();

    let minable: Vec<_> = registry
        .minables()
        .map(|id| registry.get(id).unwrap().name.as_str())
        .collect();
    assert_eq!(minable, vec!["iron-ore", "copper-ore", "coal", "stone"]);

    let fuels: Vec<_> = registry
        .fuels()
        .map(|(_, def)| (def.name.as_str(), def.fuel.unwrap().energy))
        .collect();
    assert_eq!(
        fuels,
        vec![("log", Energy(10_000_000)), ("coal", Energy(20_000_000))]
    );
}

#[test]
fn loading_base_twice_fails_on_log() {
    let mut registry = ItemRegistryImpl::new();
    let mut base = BaseMod::new();
    base.on_load(&mut registry).unwrap();

    assert_eq!(
        base.on_load(&mut registry),
        Err(RegistryError::DuplicateName("log".into()))
    );
    assert_eq!(registry.len(), 13);
}

#[test]
fn second_base_mod_in_host_is_refused() {
    let mut host = ModHost::new(ItemRegistryImpl::new())
        .with_mod(BaseMod::new())
        .with_mod(BaseMod::without_validation());

    let err = host.load().unwrap_err();
    assert_eq!(
        err,
        HostError::Registration {
            mod_name: "base".into(),
            source: RegistryError::DuplicateName("log".into()),
        }
    );
    assert_eq!(host.state(), LoadState::Failed);
}

#[test]
fn ticking_base_is_a_no_op() {
    let mut host = ModHost::new(ItemRegistryImpl::new()).with_mod(BaseMod::new());
    host.load().unwrap();

    for expected in 0..50 {
        assert_eq!(host.tick(), Ok(expected));
    }
    assert_eq!(host.registry().len(), 13);
    assert_eq!(host.registry().id_of("pipe"), Some(ItemId(13)));
}

#[test]
fn reset_allows_base_to_load_again() {
    let mut registry = ItemRegistryImpl::new();
    let mut base = BaseMod::new();
    base.on_load(&mut registry).unwrap();

    registry.reset();
    base.on_load(&mut registry).unwrap();
    assert_eq!(registry.id_of("log"), Some(ItemId(1)));
    assert_eq!(registry.len(), 13);
}

#[test]
fn data_mod_loads_after_base() {
    let dir = tempfile::tempdir().unwrap();
    let mod_dir = dir.path().join("mods").join("glassworks");
    std::fs::create_dir_all(&mod_dir).unwrap();
    std::fs::write(
        mod_dir.join("items.ron"),
        r#"(items: [
            (name: "sand", minable: true, arm_v: Some(0.2), parts: [(hd_stl: "models/sand.stl", paint: 0xC2B280ff)]),
            (name: "glass", arm_v: Some(-0.1), parts: [(hd_stl: "models/sheet-hd.stl", ld_stl: Some("models/sheet-ld.stl"), paint: 0xffffff80)]),
        ])"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("config.toml"), "data_mods = [\"glassworks\"]\n").unwrap();

    let factory = ContentFactory::new(dir.path());
    let config = factory.load_config().unwrap();
    let mut host = ModHost::from_config(&config).with_mod(BaseMod::new());
    for name in &config.data_mods {
        host.add_mod(factory.load_mod(name).unwrap());
    }

    host.load().unwrap();
    assert_eq!(host.mod_names().collect::<Vec<_>>(), vec!["base", "glassworks"]);
    assert_eq!(host.registry().len(), 15);
    assert_eq!(host.registry().id_of("glass"), Some(ItemId(15)));
    assert_eq!(host.registry().minables().count(), 5);
}

#[test]
fn data_mod_colliding_with_base_aborts() {
    let catalog = ItemLoader::parse(
        r#"(items: [(name: "coal", parts: [(hd_stl: "models/coal.stl", paint: 0x000000ff)])])"#,
    )
    .unwrap();

    let mut host = ModHost::from_config(&HostConfig::default())
        .with_mod(BaseMod::new())
        .with_mod(factory_content::DataMod::new("charcoal", catalog));

    assert_eq!(
        host.load(),
        Err(HostError::Registration {
            mod_name: "charcoal".into(),
            source: RegistryError::DuplicateName("coal".into()),
        })
    );
    assert_eq!(host.registry().len(), 13);
}

#[test]
fn registry_is_usable_through_trait_object() {
    let mut registry = ItemRegistryImpl::new();
    let dyn_registry: &mut dyn ItemRegistry = &mut registry;
    BaseMod::new().on_load(dyn_registry).unwrap();
    assert_eq!(registry.len(), BASE_NAMES.len());
}

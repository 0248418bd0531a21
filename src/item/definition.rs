/// Static definition of an item kind.
#[derive(Debug, Clone)]
pub struct ItemDef {
    pub id: String,
    pub display_name: String,
    pub max_stack: u16,
}

/// Built-in item set. Order is the `ItemId` index; `air` must stay at
/// index 0 so it matches `ItemId::AIR`.
pub fn builtin_defs() -> Vec<ItemDef> {
    vec![
        ItemDef {
            id: "air".into(),
            display_name: "Air".into(),
            max_stack: 0,
        },
        ItemDef {
            id: "minecart".into(),
            display_name: "Minecart".into(),
            max_stack: 1,
        },
    ]
}

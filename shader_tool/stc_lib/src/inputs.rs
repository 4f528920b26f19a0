/// A symbolic shader input and the binding slot the engine assigns to it.
pub struct InputBinding {
    pub name: &'static str,
    pub slot: u32,
}

/// Binding slots exposed to vertex-stage shaders as preprocessor defines.
/// Slots 0-19 are per-vertex inputs, 20-23 are per-instance inputs. The
/// order here is the order the defines appear on the compiler command line.
pub const INPUT_BINDINGS: [InputBinding; 24] = [
    InputBinding { name: "CINDER_VERTEX_INPUT_POSITION", slot: 0 },
    InputBinding { name: "CINDER_VERTEX_INPUT_NORMAL", slot: 1 },
    InputBinding { name: "CINDER_VERTEX_INPUT_TANGENT", slot: 2 },
    InputBinding { name: "CINDER_VERTEX_INPUT_BI_TANGENT", slot: 3 },
    InputBinding { name: "CINDER_VERTEX_INPUT_COLOR_0", slot: 4 },
    InputBinding { name: "CINDER_VERTEX_INPUT_COLOR_1", slot: 5 },
    InputBinding { name: "CINDER_VERTEX_INPUT_COLOR_2", slot: 6 },
    InputBinding { name: "CINDER_VERTEX_INPUT_COLOR_3", slot: 7 },
    InputBinding { name: "CINDER_VERTEX_INPUT_COLOR_4", slot: 8 },
    InputBinding { name: "CINDER_VERTEX_INPUT_COLOR_5", slot: 9 },
    InputBinding { name: "CINDER_VERTEX_INPUT_COLOR_6", slot: 10 },
    InputBinding { name: "CINDER_VERTEX_INPUT_COLOR_7", slot: 11 },
    InputBinding { name: "CINDER_VERTEX_INPUT_TEXTURE_COORD_0", slot: 12 },
    InputBinding { name: "CINDER_VERTEX_INPUT_TEXTURE_COORD_1", slot: 13 },
    InputBinding { name: "CINDER_VERTEX_INPUT_TEXTURE_COORD_2", slot: 14 },
    InputBinding { name: "CINDER_VERTEX_INPUT_TEXTURE_COORD_3", slot: 15 },
    InputBinding { name: "CINDER_VERTEX_INPUT_TEXTURE_COORD_4", slot: 16 },
    InputBinding { name: "CINDER_VERTEX_INPUT_TEXTURE_COORD_5", slot: 17 },
    InputBinding { name: "CINDER_VERTEX_INPUT_TEXTURE_COORD_6", slot: 18 },
    InputBinding { name: "CINDER_VERTEX_INPUT_TEXTURE_COORD_7", slot: 19 },
    InputBinding { name: "CINDER_INSTANCE_INPUT_INSTANCE_ID", slot: 20 },
    InputBinding { name: "CINDER_INSTANCE_INPUT_POSITION", slot: 21 },
    InputBinding { name: "CINDER_INSTANCE_INPUT_ROTATION", slot: 22 },
    InputBinding { name: "CINDER_INSTANCE_INPUT_SCALE", slot: 23 },
];

/// Renders the binding table as compiler arguments, in table order.
pub fn define_args() -> Vec<String> {
    INPUT_BINDINGS
        .iter()
        .flat_map(|binding| {
            vec![
                "--D".to_string(),
                format!("{}={}", binding.name, binding.slot),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slot_used_once() {
        let mut seen = [false; 24];
        for binding in INPUT_BINDINGS.iter() {
            assert!(!seen[binding.slot as usize], "slot {} used twice", binding.slot);
            seen[binding.slot as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in INPUT_BINDINGS.iter().enumerate() {
            for b in INPUT_BINDINGS.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn slots_follow_table_order() {
        for (i, binding) in INPUT_BINDINGS.iter().enumerate() {
            assert_eq!(binding.slot as usize, i);
        }
    }

    #[test]
    fn define_args_render_in_order() {
        let args = define_args();
        assert_eq!(args.len(), 48);
        assert_eq!(args[0], "--D");
        assert_eq!(args[1], "CINDER_VERTEX_INPUT_POSITION=0");
        assert_eq!(args[46], "--D");
        assert_eq!(args[47], "CINDER_INSTANCE_INPUT_SCALE=23");
    }
}

// Collision layers for filtering physics interactions

use rapier2d::prelude::*;

/// Collision layers for the arena
///
/// The ground probe must only react to terrain, so layers are kept explicit
/// instead of letting everything collide with everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Static ground and platforms
    Terrain = 0b0000_0001,

    /// The dragon's body
    Dragon = 0b0000_0010,

    /// Arena hazards (spikes, lava, etc.)
    Hazard = 0b0000_0100,
}

impl Layer {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // Terrain blocks the dragon and hazards
            Layer::Terrain => {
                Group::from_bits_truncate(Layer::Dragon as u32 | Layer::Hazard as u32)
            }

            // The dragon collides with terrain and hazards
            Layer::Dragon => {
                Group::from_bits_truncate(Layer::Terrain as u32 | Layer::Hazard as u32)
            }

            // Hazards touch the dragon and rest on terrain
            Layer::Hazard => {
                Group::from_bits_truncate(Layer::Dragon as u32 | Layer::Terrain as u32)
            }
        };

        InteractionGroups::new(memberships, filter)
    }
}

/// Interaction groups for the ground-overlap query: hits terrain only
pub fn ground_query_groups() -> InteractionGroups {
    InteractionGroups::new(
        Group::from_bits_truncate(Layer::Dragon as u32),
        Group::from_bits_truncate(Layer::Terrain as u32),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_have_unique_bits() {
        let layers = [Layer::Terrain, Layer::Dragon, Layer::Hazard];
        for (i, a) in layers.iter().enumerate() {
            for (j, b) in layers.iter().enumerate() {
                if i != j {
                    assert_ne!(*a as u32, *b as u32, "Layers must have unique bits");
                }
            }
        }
    }

    #[test]
    fn test_dragon_collides_with_terrain() {
        let groups = Layer::Dragon.to_interaction_groups();
        let terrain_bit = Group::from_bits_truncate(Layer::Terrain as u32);
        assert!(groups.filter.contains(terrain_bit));
    }

    #[test]
    fn test_dragon_does_not_collide_with_dragon() {
        let groups = Layer::Dragon.to_interaction_groups();
        assert!(!groups.filter.contains(groups.memberships));
    }

    #[test]
    fn test_ground_query_hits_terrain_only() {
        let groups = ground_query_groups();
        assert!(groups
            .filter
            .contains(Group::from_bits_truncate(Layer::Terrain as u32)));
        assert!(!groups
            .filter
            .contains(Group::from_bits_truncate(Layer::Hazard as u32)));
    }
}

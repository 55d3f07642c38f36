//! User-defined actions (sorties) and the normalized table built from them.

use sk_core::{ActionId, NUM_RESOURCES, Resource, ResourceVec};

use crate::{InputError, InputResult};

/// One action as supplied by the ingestion layer.
///
/// `consumption` is a per-run COST: positive entries are consumed, negative
/// entries are net gains.  The time dimension is in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionSpec {
    pub name:        String,
    pub consumption: ResourceVec,
    pub reward:      f64,
    /// Largest share of total action volume this action may take, in [0, 1].
    pub max_share:   f64,
}

impl ActionSpec {
    pub fn new(name: impl Into<String>, consumption: [f64; NUM_RESOURCES], reward: f64, max_share: f64) -> Self {
        Self {
            name: name.into(),
            consumption: ResourceVec(consumption),
            reward,
            max_share,
        }
    }
}

/// Validated N×6 consumption matrix plus the N-length reward and cap
/// vectors.  Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionTable {
    names:       Vec<String>,
    consumption: Vec<ResourceVec>,
    rewards:     Vec<f64>,
    max_shares:  Vec<f64>,
}

impl ActionTable {
    /// Build from ragged columns.
    ///
    /// `names` may be empty, in which case actions are named by position.
    /// Fails if there are no actions, if any length disagrees with the number
    /// of consumption rows, if a row is not six wide, if any value is not
    /// finite, or if a cap lies outside [0, 1].
    pub fn from_columns(
        names:       Vec<String>,
        consumption: &[Vec<f64>],
        rewards:     &[f64],
        max_shares:  &[f64],
    ) -> InputResult<Self> {
        let n = consumption.len();
        if n == 0 {
            return Err(InputError::NoActions);
        }

        let names = if names.is_empty() {
            (1..=n).map(|i| format!("sortie {i}")).collect()
        } else {
            names
        };
        check_len(names.len(), n, "names")?;
        check_len(rewards.len(), n, "reward vector")?;
        check_len(max_shares.len(), n, "max share vector")?;

        let rows = consumption
            .iter()
            .enumerate()
            .map(|(row, values)| {
                ResourceVec::from_slice(values).ok_or(InputError::RowWidth {
                    row,
                    expected: NUM_RESOURCES,
                    got:      values.len(),
                })
            })
            .collect::<InputResult<Vec<_>>>()?;

        let specs = names
            .into_iter()
            .zip(rows)
            .zip(rewards.iter().zip(max_shares))
            .map(|((name, consumption), (&reward, &max_share))| ActionSpec {
                name,
                consumption,
                reward,
                max_share,
            })
            .collect();

        Self::from_specs(specs)
    }

    /// Build from already-shaped specs, applying the range checks.
    pub fn from_specs(specs: Vec<ActionSpec>) -> InputResult<Self> {
        if specs.is_empty() {
            return Err(InputError::NoActions);
        }

        for spec in &specs {
            for r in Resource::ALL {
                if !spec.consumption[r].is_finite() {
                    return Err(InputError::NotFinite {
                        what: format!("{r} cost of action {:?}", spec.name),
                    });
                }
            }
            if !spec.reward.is_finite() {
                return Err(InputError::NotFinite {
                    what: format!("reward of action {:?}", spec.name),
                });
            }
            if !(0.0..=1.0).contains(&spec.max_share) {
                return Err(InputError::ShareOutOfRange {
                    action: spec.name.clone(),
                    value:  spec.max_share,
                });
            }
        }

        let mut table = ActionTable {
            names:       Vec::with_capacity(specs.len()),
            consumption: Vec::with_capacity(specs.len()),
            rewards:     Vec::with_capacity(specs.len()),
            max_shares:  Vec::with_capacity(specs.len()),
        };
        for spec in specs {
            table.names.push(spec.name);
            table.consumption.push(spec.consumption);
            table.rewards.push(spec.reward);
            table.max_shares.push(spec.max_share);
        }
        log::debug!("normalized action table with {} actions", table.len());
        Ok(table)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    /// Always `false` for a constructed table; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ActionId> {
        ActionId::range(self.len())
    }

    pub fn name(&self, id: ActionId) -> &str {
        &self.names[id.index()]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn consumption(&self, id: ActionId) -> ResourceVec {
        self.consumption[id.index()]
    }

    pub fn reward(&self, id: ActionId) -> f64 {
        self.rewards[id.index()]
    }

    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    pub fn max_share(&self, id: ActionId) -> f64 {
        self.max_shares[id.index()]
    }
}

fn check_len(got: usize, expected: usize, what: &'static str) -> InputResult<()> {
    if got != expected {
        return Err(InputError::LengthMismatch { expected, got, what });
    }
    Ok(())
}

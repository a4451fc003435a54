//! Structure-of-Arrays agent storage.

use sg_core::{AgentId, Archetype, GridPos, Point2};

/// Storage for every live agent.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let p = store.position[agent.index()];
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Immutable type of each agent.
    pub kind: Vec<Archetype>,

    /// Continuous position.  Equals the occupied cell's coordinate except
    /// while a move is animating.
    pub position: Vec<Point2>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            count:    0,
            kind:     Vec::with_capacity(n),
            position: Vec::with_capacity(n),
        }
    }

    /// Create an agent of `kind` standing exactly on `cell`.  Ids are handed
    /// out in creation order starting at `AgentId(0)`.
    pub fn spawn(&mut self, kind: Archetype, cell: GridPos) -> AgentId {
        let id = AgentId(self.count as u32);
        self.kind.push(kind);
        self.position.push(Point2::from(cell));
        self.count += 1;
        id
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// # Panics
    /// Panics if `agent` does not exist.
    #[inline]
    pub fn kind(&self, agent: AgentId) -> Archetype {
        self.kind[agent.index()]
    }

    #[inline]
    pub fn get_kind(&self, agent: AgentId) -> Option<Archetype> {
        self.kind.get(agent.index()).copied()
    }

    /// # Panics
    /// Panics if `agent` does not exist.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Point2 {
        self.position[agent.index()]
    }

    #[inline]
    pub fn get_position(&self, agent: AgentId) -> Option<Point2> {
        self.position.get(agent.index()).copied()
    }

    /// # Panics
    /// Panics if `agent` does not exist.
    #[inline]
    pub fn set_position(&mut self, agent: AgentId, position: Point2) {
        self.position[agent.index()] = position;
    }

    /// Remove every agent.  Ids restart at zero afterwards.
    pub fn clear(&mut self) {
        self.count = 0;
        self.kind.clear();
        self.position.clear();
    }
}

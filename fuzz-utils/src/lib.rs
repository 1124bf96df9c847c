use arbitrary::{Arbitrary, Unstructured};
use hyperion::mock::Mock;
use hyperion::RbTree;
use std::fmt::{self, Debug, Display, Formatter};

const VARIANTS: u8 = 9;

/// A single operation on one of the trees being fuzzed, along with its expected result
///
/// Expected results are filled in by running the same operation on a [`Mock`] while the command
/// is generated.
#[derive(Clone)]
pub enum Command<K> {
    Insert {
        id: TreeId,
        key: K,
        /// Whether the key wasn't already present
        added: bool,
    },
    Contains {
        id: TreeId,
        key: K,
        present: bool,
    },
    ToVec {
        id: TreeId,
        keys: Vec<K>,
    },
    Iter {
        id: TreeId,
        /// Access pattern for elements in the iterator, with the expected key from each
        access: Vec<(IterDirection, Option<K>)>,
    },
    Height {
        id: TreeId,
        /// Largest height permitted for a red-black tree with the same number of keys
        max: usize,
    },
    IsEmpty {
        id: TreeId,
        empty: bool,
    },
    Len {
        id: TreeId,
        len: usize,
    },
    CloneTree {
        src_id: TreeId,
        new_id: TreeId,
    },
    DropTree {
        id: TreeId,
    },
}

#[derive(Debug, Copy, Clone, Arbitrary)]
pub struct TreeId(usize);

impl Display for TreeId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Copy, Clone, Arbitrary)]
pub enum IterDirection {
    Forward,
    Backward,
}

/// Sequence of [`Command`]s
pub struct CommandSequence<K> {
    pub cmds: Vec<Command<K>>,
}

// Prints the command sequence as a unit test that can be pasted directly into
// `src/tree/tests/basic.rs`
impl<K: Debug> Debug for CommandSequence<K> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let init_id = TreeId(0);
        f.write_str("#[test]\n")?;
        f.write_str("fn test_case() {\n")?;
        writeln!(f, "    let mut tree_{init_id} = RbTree::new_empty();")?;
        for c in &self.cmds {
            c.fmt(f)?;
        }
        f.write_str("}")
    }
}

impl<K: Debug> Debug for Command<K> {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Insert { id, key, added: true } => {
                writeln!(f, "    assert!(tree_{id}.insert({key:?}));")?;
                writeln!(f, "    tree_{id}.validate();")
            }
            Self::Insert { id, key, added: false } => {
                writeln!(f, "    assert!(!tree_{id}.insert({key:?}));")?;
                writeln!(f, "    tree_{id}.validate();")
            }
            Self::Contains { id, key, present: true } => {
                writeln!(f, "    assert!(tree_{id}.contains(&{key:?}));")
            }
            Self::Contains { id, key, present: false } => {
                writeln!(f, "    assert!(!tree_{id}.contains(&{key:?}));")
            }
            Self::ToVec { id, keys } if keys.is_empty() => {
                writeln!(f, "    assert!(tree_{id}.to_vec().is_empty());")
            }
            Self::ToVec { id, keys } => {
                writeln!(f, "    assert_eq!(tree_{id}.to_vec(), {keys:?});")
            }
            Self::Iter { id, access } => {
                f.write_str("    {\n")?;

                let maybe_mut = match access.is_empty() {
                    true => "_", // add an underscore to mark `iter` as unused
                    false => "mut ",
                };

                writeln!(f, "        let {maybe_mut}iter = tree_{id}.iter();")?;
                for (a, key) in access {
                    let method = match a {
                        IterDirection::Forward => "next",
                        IterDirection::Backward => "next_back",
                    };

                    match key {
                        None => writeln!(f, "        assert!(iter.{method}().is_none());")?,
                        Some(k) => writeln!(f, "        assert_eq!(iter.{method}(), Some(&{k:?}));")?,
                    }
                }

                f.write_str("    }\n")
            }
            Self::Height { id, max: 0 } => writeln!(f, "    assert_eq!(tree_{id}.height(), 0);"),
            Self::Height { id, max } => writeln!(f, "    assert!(tree_{id}.height() <= {max});"),
            Self::IsEmpty { id, empty: true } => writeln!(f, "    assert!(tree_{id}.is_empty());"),
            Self::IsEmpty { id, empty: false } => writeln!(f, "    assert!(!tree_{id}.is_empty());"),
            Self::Len { id, len } => writeln!(f, "    assert_eq!(tree_{id}.len(), {len});"),
            Self::CloneTree { src_id, new_id } => {
                writeln!(f, "    let mut tree_{new_id} = tree_{src_id}.clone();")
            }
            Self::DropTree { id } => writeln!(f, "    drop(tree_{id});"),
        }
    }
}

impl<K> CommandSequence<K> {
    pub fn map<J, F: FnMut(K) -> J>(self, mut f: F) -> CommandSequence<J> {
        CommandSequence {
            cmds: self.cmds.into_iter().map(|c| c.map_key(&mut f)).collect(),
        }
    }
}

impl<K> Command<K> {
    #[rustfmt::skip]
    pub fn map_key<J, F: FnMut(K) -> J>(self, mut f: F) -> Command<J> {
        match self {
            Self::Insert { id, key, added } => Command::Insert { id, key: f(key), added },
            Self::Contains { id, key, present } => Command::Contains { id, key: f(key), present },
            Self::ToVec { id, keys } => Command::ToVec {
                id,
                keys: keys.into_iter().map(f).collect(),
            },
            Self::Iter { id, access } => Command::Iter {
                id,
                access: access.into_iter().map(|(dir, k)| (dir, k.map(&mut f))).collect(),
            },
            Self::Height { id, max } => Command::Height { id, max },
            Self::IsEmpty { id, empty } => Command::IsEmpty { id, empty },
            Self::Len { id, len } => Command::Len { id, len },
            Self::CloneTree { src_id, new_id } => Command::CloneTree { src_id, new_id },
            Self::DropTree { id } => Command::DropTree { id },
        }
    }
}

impl<'d, K> Arbitrary<'d> for CommandSequence<K>
where
    K: Arbitrary<'d> + Ord + Clone,
{
    fn arbitrary(u: &mut Unstructured<'d>) -> arbitrary::Result<Self> {
        let mut cmds = Vec::new();

        let mut mocks = vec![Some(Mock::new_empty())];
        let mut num_trees = 1;

        while !u.is_empty() && num_trees != 0 {
            let id = TreeId(choose_sparse_index(u, num_trees, &mocks)?);
            let variant = u.int_in_range(0..=VARIANTS - 1)?;
            cmds.push(arbitrary_command(
                u,
                variant,
                id,
                &mut num_trees,
                &mut mocks,
            )?);
        }

        Ok(CommandSequence { cmds })
    }
}

fn choose_sparse_index<T>(
    u: &mut Unstructured,
    count: usize,
    vals: &[Option<T>],
) -> arbitrary::Result<usize> {
    let mut idx = u.choose_index(count)?;
    let mut i = 0;
    while i <= idx {
        if vals[i].is_none() {
            idx += 1;
        }
        i += 1;
    }
    Ok(idx)
}

/// Creates a new command and executes it on the provided mock trees
///
/// `id` must refer to a tree that still exists.
fn arbitrary_command<'d, K>(
    u: &mut Unstructured<'d>,
    variant: u8,
    id: TreeId,
    count: &mut usize,
    mocks: &mut Vec<Option<Mock<K>>>,
) -> arbitrary::Result<Command<K>>
where
    K: Arbitrary<'d> + Ord + Clone,
{
    let mock = match mocks[id.0].as_mut() {
        Some(m) => m,
        None => unreachable!("chose dropped tree {id}"),
    };

    match variant {
        // insert
        0 => {
            let key: K = u.arbitrary()?;
            let added = mock.insert(key.clone());
            Ok(Command::Insert { id, key, added })
        }
        // contains
        1 => {
            let key: K = u.arbitrary()?;
            let present = mock.contains(&key);
            Ok(Command::Contains { id, key, present })
        }
        // to_vec
        2 => Ok(Command::ToVec {
            id,
            keys: mock.to_vec(),
        }),
        // iter
        3 => {
            let access_directions: Vec<IterDirection> = u.arbitrary()?;

            let mut iter = mock.iter();
            let access = access_directions
                .into_iter()
                .map(|direction| {
                    let key = match direction {
                        IterDirection::Forward => iter.next(),
                        IterDirection::Backward => iter.next_back(),
                    };
                    (direction, key.cloned())
                })
                .collect();

            Ok(Command::Iter { id, access })
        }
        // height
        4 => Ok(Command::Height {
            id,
            max: mock.max_height(),
        }),
        // is_empty
        5 => Ok(Command::IsEmpty {
            id,
            empty: mock.is_empty(),
        }),
        // len
        6 => Ok(Command::Len {
            id,
            len: mock.len(),
        }),
        // clone
        7 => {
            let new_id = TreeId(mocks.len());
            mocks.push(mocks[id.0].clone());
            *count += 1;
            Ok(Command::CloneTree { src_id: id, new_id })
        }
        // drop tree
        8 => {
            mocks[id.0].take();
            *count -= 1;
            Ok(Command::DropTree { id })
        }
        _ => unreachable!("bad Command variant {variant}"),
    }
}

/// Ongoing state for executing commands to an [`RbTree`]
pub struct RunnerState<K> {
    trees: Vec<Option<RbTree<K>>>,
}

impl<K> RunnerState<K>
where
    K: Ord + Clone + Debug,
{
    /// Creates a new, blank `RunnerState` to run a series of commands
    pub fn init() -> Self {
        RunnerState {
            trees: vec![Some(RbTree::new_empty())],
        }
    }

    fn tree(&self, id: TreeId) -> &RbTree<K> {
        self.trees[id.0].as_ref().unwrap()
    }

    fn tree_mut(&mut self, id: TreeId) -> &mut RbTree<K> {
        self.trees[id.0].as_mut().unwrap()
    }

    /// Runs the command
    pub fn run_cmd(&mut self, cmd: &Command<K>) {
        match cmd {
            Command::Insert { id, key, added } => {
                let tree = self.tree_mut(*id);
                assert_eq!(tree.insert(key.clone()), *added);
                tree.validate();
            }
            Command::Contains { id, key, present } => {
                assert_eq!(self.tree(*id).contains(key), *present);
            }
            Command::ToVec { id, keys } => {
                assert_eq!(&self.tree(*id).to_vec(), keys);
            }
            Command::Iter { id, access } => {
                let mut iter = self.tree(*id).iter();
                for (dir, expected) in access {
                    let item = match dir {
                        IterDirection::Forward => iter.next(),
                        IterDirection::Backward => iter.next_back(),
                    };
                    assert_eq!(item, expected.as_ref());
                }
            }
            Command::Height { id, max } => {
                let height = self.tree(*id).height();
                assert!(height <= *max, "height {height} above bound {max}");
            }
            Command::IsEmpty { id, empty } => {
                assert_eq!(self.tree(*id).is_empty(), *empty);
            }
            Command::Len { id, len } => {
                assert_eq!(self.tree(*id).len(), *len);
            }
            Command::CloneTree { src_id, .. } => {
                let new_tree = self.tree(*src_id).clone();
                new_tree.validate();
                self.trees.push(Some(new_tree));
            }
            Command::DropTree { id } => drop(self.trees[id.0].take()),
        }
    }
}

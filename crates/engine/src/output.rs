// crates/engine/src/output.rs
use hashbrown::{HashMap, HashSet};
use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::rc::Rc;

/// Creates the append-mode sinks the router writes into.
pub trait OutputOpener {
    type Writer: Write;

    /// Open (creating if needed) the sink called `name` for appending.
    fn open(&self, name: &str) -> io::Result<Self::Writer>;

    /// Where `name` lives, for diagnostics.
    fn locate(&self, name: &str) -> PathBuf;
}

/// Opens buffered append-mode files inside one directory.
#[derive(Debug, Clone)]
pub struct DirOpener {
    dir: PathBuf,
}

impl DirOpener {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

impl OutputOpener for DirOpener {
    type Writer = BufWriter<File>;

    fn open(&self, name: &str) -> io::Result<Self::Writer> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.dir.join(name))
            .map(BufWriter::new)
    }

    fn locate(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

type Store = Rc<RefCell<HashMap<String, Vec<u8>>>>;

/// In-memory opener. Every sink appends into a shared map keyed by name, so
/// contents survive the writer being dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryOpener {
    store: Store,
    failing: Rc<HashSet<String>>,
    broken_writes: Rc<HashSet<String>>,
    broken_flushes: Rc<HashSet<String>>,
    opened: Rc<RefCell<Vec<String>>>,
    flushed: Rc<RefCell<Vec<String>>>,
}

impl MemoryOpener {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An opener that refuses to open any of `names`.
    pub fn failing<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            failing: Rc::new(names.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Sinks for `names` open fine but reject every write.
    #[must_use]
    pub fn with_broken_writes<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            broken_writes: Rc::new(names.into_iter().map(Into::into).collect()),
            ..self
        }
    }

    /// Sinks for `names` accept writes but fail to flush.
    #[must_use]
    pub fn with_broken_flushes<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            broken_flushes: Rc::new(names.into_iter().map(Into::into).collect()),
            ..self
        }
    }

    /// Everything written to `name` so far.
    #[must_use]
    pub fn contents(&self, name: &str) -> Option<Vec<u8>> {
        self.store.borrow().get(name).cloned()
    }

    /// Like [`Self::contents`], decoded lossily.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<String> {
        self.contents(name)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Names passed to successful `open` calls, in order.
    #[must_use]
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    /// Names of sinks flushed successfully, in order.
    #[must_use]
    pub fn flushed(&self) -> Vec<String> {
        self.flushed.borrow().clone()
    }
}

impl OutputOpener for MemoryOpener {
    type Writer = MemoryWriter;

    fn open(&self, name: &str) -> io::Result<Self::Writer> {
        if self.failing.contains(name) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{name} is not writable"),
            ));
        }
        self.store.borrow_mut().entry(name.to_owned()).or_default();
        self.opened.borrow_mut().push(name.to_owned());
        Ok(MemoryWriter {
            name: name.to_owned(),
            store: Rc::clone(&self.store),
            flushed: Rc::clone(&self.flushed),
            broken_write: self.broken_writes.contains(name),
            broken_flush: self.broken_flushes.contains(name),
        })
    }

    fn locate(&self, name: &str) -> PathBuf {
        PathBuf::from(name)
    }
}

#[derive(Debug)]
pub struct MemoryWriter {
    name: String,
    store: Store,
    flushed: Rc<RefCell<Vec<String>>>,
    broken_write: bool,
    broken_flush: bool,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.broken_write {
            return Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"));
        }
        self.store
            .borrow_mut()
            .entry_ref(self.name.as_str())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.broken_flush {
            return Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"));
        }
        self.flushed.borrow_mut().push(self.name.clone());
        Ok(())
    }
}

use ahash::AHashMap;
use ndarray::ArrayD;

/// Type alias for n-dimensional arrays used as tensors throughout the library.
///
/// All spatial transforms expect tensors in the layout
/// `[batch_size, channels, spatial...]` with one, two or three spatial
/// dimensions.
pub type Tensor = ArrayD<f32>;

/// A dictionary of named tensors forming one augmentation batch.
///
/// Transforms select the entries they operate on by key, so a batch can carry
/// an image under `"data"`, a segmentation mask under `"mask"` and a label
/// tensor under `"label"` while a spatial transform only touches the first
/// two.
///
/// # Example
/// ```rust
/// use rustyaug::batch::TensorBatch;
/// use ndarray::Array4;
///
/// let mut batch = TensorBatch::new();
/// batch.insert("data", Array4::<f32>::zeros((2, 3, 8, 8)).into_dyn());
/// batch.insert("mask", Array4::<f32>::zeros((2, 1, 8, 8)).into_dyn());
///
/// assert_eq!(batch.len(), 2);
/// assert!(batch.contains_key("data"));
/// assert_eq!(batch.get("data").unwrap().shape(), &[2, 3, 8, 8]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TensorBatch {
    entries: AHashMap<String, Tensor>,
}

impl TensorBatch {
    /// Creates a new empty batch
    ///
    /// # Returns
    ///
    /// * `TensorBatch` - an empty batch
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }

    /// Inserts a tensor under the given key, replacing any previous entry
    ///
    /// # Parameters
    ///
    /// - `key` - Name of the batch entry
    /// - `tensor` - Tensor stored under that name
    ///
    /// # Returns
    ///
    /// * `Option<Tensor>` - The previous tensor stored under `key`, if any
    pub fn insert(&mut self, key: impl Into<String>, tensor: Tensor) -> Option<Tensor> {
        self.entries.insert(key.into(), tensor)
    }

    /// Returns a reference to the tensor stored under `key`
    pub fn get(&self, key: &str) -> Option<&Tensor> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the tensor stored under `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Tensor> {
        self.entries.get_mut(key)
    }

    /// Removes and returns the tensor stored under `key`
    pub fn remove(&mut self, key: &str) -> Option<Tensor> {
        self.entries.remove(key)
    }

    /// Returns `true` if the batch contains an entry with the given key
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries in the batch
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the batch holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entry names in the batch
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Iterates over `(key, tensor)` pairs in the batch
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Tensor)> {
        self.entries.iter()
    }
}

impl From<AHashMap<String, Tensor>> for TensorBatch {
    fn from(entries: AHashMap<String, Tensor>) -> Self {
        Self { entries }
    }
}

impl From<TensorBatch> for AHashMap<String, Tensor> {
    fn from(batch: TensorBatch) -> Self {
        batch.entries
    }
}

impl FromIterator<(String, Tensor)> for TensorBatch {
    fn from_iter<I: IntoIterator<Item = (String, Tensor)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

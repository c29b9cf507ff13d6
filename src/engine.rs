use crate::{AutocompleteError, Cursor, Dictionary, Label};

/// A dictionary together with one navigation session.
///
/// This is the type a host drives keystroke by keystroke: words go in through
/// [`add`](Autocomplete::add), the prefix moves with
/// [`advance`](Autocomplete::advance) / [`retreat`](Autocomplete::retreat) /
/// [`reset`](Autocomplete::reset), and suggestions come from the query
/// methods. Further independent sessions over the same words can be opened
/// with [`session`](Autocomplete::session).
#[derive(Clone, Debug)]
pub struct Autocomplete<L: Label> {
    dict: Dictionary<L>,
    cursor: Cursor<L>,
}

impl<L: Label> Default for Autocomplete<L> {
    fn default() -> Self {
        Self::with_dictionary(Dictionary::new())
    }
}

impl<L: Label> Autocomplete<L> {
    /// Creates an engine with an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine over an existing dictionary, at the empty prefix.
    pub fn with_dictionary(dict: Dictionary<L>) -> Self {
        Self {
            dict,
            cursor: Cursor::new(),
        }
    }

    /// The underlying dictionary.
    pub fn dictionary(&self) -> &Dictionary<L> {
        &self.dict
    }

    /// The engine's own navigation state.
    pub fn cursor(&self) -> &Cursor<L> {
        &self.cursor
    }

    /// Opens a fresh cursor over this engine's dictionary. Pass
    /// [`dictionary`](Autocomplete::dictionary) to its methods.
    pub fn session(&self) -> Cursor<L> {
        Cursor::new()
    }

    /// Consumes the engine, returning its dictionary.
    pub fn into_dictionary(self) -> Dictionary<L> {
        self.dict
    }

    /// Adds `word` to the dictionary in O(`word.len()`) time.
    ///
    /// Returns `Ok(false)` if the word was already stored. The current prefix
    /// is kept; if it was locked and the new word gives it a match, the
    /// cursor is re-synchronised.
    ///
    /// # Errors
    ///
    /// Returns [`AutocompleteError::InvalidArgument`] if `word` is empty.
    pub fn add(&mut self, word: &[L]) -> Result<bool, AutocompleteError> {
        let inserted = self.dict.insert(word)?;
        if inserted && self.cursor.is_locked() {
            self.cursor.sync(&self.dict);
        }
        Ok(inserted)
    }

    /// Adds the labels of `text`. See [`Autocomplete::add`].
    pub fn add_str(&mut self, text: &str) -> Result<bool, AutocompleteError> {
        self.add(&L::from_text(text))
    }

    /// Adds the current prefix as a word, in O(prefix length) time.
    ///
    /// # Errors
    ///
    /// Returns [`AutocompleteError::InvalidArgument`] if the prefix is empty.
    pub fn add_prefix(&mut self) -> Result<bool, AutocompleteError> {
        let word = self.cursor.current_prefix().to_vec();
        self.add(&word)
    }

    /// Appends `label` to the prefix. See [`Cursor::advance`].
    pub fn advance(&mut self, label: L) -> bool {
        self.cursor.advance(&self.dict, label)
    }

    /// Removes the last label of the prefix. See [`Cursor::retreat`].
    ///
    /// # Errors
    ///
    /// Returns [`AutocompleteError::InvalidState`] if the prefix is empty.
    pub fn retreat(&mut self) -> Result<(), AutocompleteError> {
        self.cursor.retreat(&self.dict)
    }

    /// Clears the prefix.
    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Returns true if the prefix is a stored word.
    pub fn is_word(&self) -> bool {
        self.cursor.is_word(&self.dict)
    }

    /// Number of stored words starting with the prefix.
    pub fn number_of_predictions(&self) -> usize {
        self.cursor.number_of_predictions(&self.dict)
    }

    /// One stored word starting with the prefix, if any.
    pub fn retrieve_prediction(&self) -> Option<Vec<L>> {
        self.cursor.retrieve_prediction(&self.dict)
    }

    /// [`retrieve_prediction`](Autocomplete::retrieve_prediction) as text.
    pub fn prediction_text(&self) -> Option<String> {
        self.retrieve_prediction().map(|w| L::to_text(&w))
    }

    /// The labels typed so far.
    pub fn current_prefix(&self) -> &[L] {
        self.cursor.current_prefix()
    }

    /// The prefix as text.
    pub fn prefix_text(&self) -> String {
        self.cursor.prefix_text()
    }
}

impl<L: Label> From<Dictionary<L>> for Autocomplete<L> {
    fn from(dict: Dictionary<L>) -> Self {
        Self::with_dictionary(dict)
    }
}

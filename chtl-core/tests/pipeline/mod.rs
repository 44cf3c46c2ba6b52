mod documents;
mod hoisting;
mod recovery;

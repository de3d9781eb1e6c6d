mod directory;
mod reconcile;

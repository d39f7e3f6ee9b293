use serde::{Deserialize, Serialize};

use super::errors::ArtifactError;

/// A single node of a decision tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Go to `left` when `features[feature] <= threshold`, otherwise to `right`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node voting for `classes[class]`
    Leaf { class: usize },
}

/// Decision tree stored as a flat node array; node 0 is the root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct DecisionTree {
    pub nodes: Vec<Node>,
}

impl DecisionTree {
    /// Walk the tree and return the index of the class at the reached leaf.
    ///
    /// A well-formed tree reaches a leaf in fewer steps than it has nodes,
    /// so a longer walk means the node links form a cycle.
    fn vote(&self, tree_index: usize, features: &[f64], class_count: usize) -> Result<usize, ArtifactError> {
        let malformed = |reason: String| ArtifactError::MalformedTree { tree: tree_index, reason };

        let mut current = 0;
        for _ in 0..self.nodes.len() {
            let node = self
                .nodes
                .get(current)
                .ok_or_else(|| malformed(format!("node {} does not exist", current)))?;

            match node {
                Node::Leaf { class } => {
                    if *class >= class_count {
                        return Err(malformed(format!("leaf class {} out of range", class)));
                    }
                    return Ok(*class);
                }
                Node::Split { feature, threshold, left, right } => {
                    let value = features
                        .get(*feature)
                        .ok_or_else(|| malformed(format!("split on missing feature {}", feature)))?;
                    current = if value <= threshold { *left } else { *right };
                }
            }
        }

        Err(malformed("no leaf reached".to_string()))
    }
}

/// Majority-vote ensemble of decision trees (random-forest style classifier)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreeEnsembleClassifier {
    /// Names of the input features, in the order they are expected
    pub feature_names: Vec<String>,

    /// Class labels; leaves refer to positions in this list
    pub classes: Vec<u8>,

    /// Member trees
    pub trees: Vec<DecisionTree>,
}

impl TreeEnsembleClassifier {
    /// Check that the ensemble has something to evaluate
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.classes.is_empty() {
            return Err(ArtifactError::EmptyModel("classifier has no classes".to_string()));
        }

        if self.trees.is_empty() {
            return Err(ArtifactError::EmptyModel("classifier has no trees".to_string()));
        }

        if let Some(index) = self.trees.iter().position(|tree| tree.nodes.is_empty()) {
            return Err(ArtifactError::MalformedTree {
                tree: index,
                reason: "tree has no nodes".to_string(),
            });
        }

        Ok(())
    }

    /// Predict a class label by majority vote. Ties go to the class listed first.
    pub fn predict_class(&self, features: &[f64]) -> Result<u8, ArtifactError> {
        if features.len() != self.feature_names.len() {
            return Err(ArtifactError::FeatureMismatch {
                expected: self.feature_names.len(),
                actual: features.len(),
            });
        }

        if self.trees.is_empty() || self.classes.is_empty() {
            return Err(ArtifactError::EmptyModel("classifier has nothing to vote".to_string()));
        }

        let mut votes = vec![0usize; self.classes.len()];
        for (index, tree) in self.trees.iter().enumerate() {
            let class = tree.vote(index, features, self.classes.len())?;
            votes[class] += 1;
        }

        let mut winner = 0;
        for (class, count) in votes.iter().enumerate() {
            if *count > votes[winner] {
                winner = class;
            }
        }

        Ok(self.classes[winner])
    }
}

// Bounded FIFO of the most recent inputs of one indicator
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct RollingWindow {
    period: usize,
    values: VecDeque<f64>,
}

impl RollingWindow {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            values: VecDeque::new(),
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.values.iter()
    }

    pub fn push(&mut self, value: f64) {
        self.values.push_back(value);
    }

    /// Trims the oldest entries until fewer than `period` remain. Called after the
    /// step's append, so the window reaches `period` entries only between the
    /// append and the end of that step.
    pub fn evict(&mut self) {
        while self.values.len() >= self.period && !self.values.is_empty() {
            self.values.pop_front();
        }
    }

    /// Arithmetic mean of the current contents, `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let sum: f64 = self.values.iter().sum();
        Some(sum / self.values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty() {
        assert_eq!(RollingWindow::new(3).mean(), None);
    }

    #[test]
    fn test_mean_in_insertion_order() {
        let mut window = RollingWindow::new(4);
        window.push(1.0);
        window.push(2.0);
        window.push(6.0);
        assert_eq!(window.mean(), Some(3.0));
    }

    #[test]
    fn test_evict_drops_oldest_first() {
        let mut window = RollingWindow::new(3);
        for value in [1.0, 2.0, 3.0] {
            window.push(value);
            window.evict();
        }
        // Three pushes with period 3: the third push reaches the period and the oldest goes
        assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![2.0, 3.0]);
        window.push(4.0);
        assert_eq!(window.len(), 3);
        window.evict();
        assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_period_one_stays_empty() {
        let mut window = RollingWindow::new(1);
        window.push(5.0);
        assert_eq!(window.len(), 1);
        window.evict();
        assert!(window.is_empty());
    }
}

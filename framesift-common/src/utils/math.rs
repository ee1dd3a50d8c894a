// https://www.johndcook.com/blog/standard_deviation/
pub struct Average {
    avg: f64,
    k: f64,
}

impl Average {
    pub fn new() -> Self {
        Self { avg: 0.0, k: 0.0 }
    }

    pub fn add(&mut self, value: impl Into<f64>) {
        let value = value.into();
        self.k += 1.0;
        self.avg += (value - self.avg) / self.k;
    }

    pub fn average(&self) -> f64 {
        self.avg
    }

    pub fn count(&self) -> f64 {
        self.k
    }
}

impl Default for Average {
    fn default() -> Self {
        Self::new()
    }
}

/// Running variance, numerically stable for millions of samples.
pub struct Variance {
    avg: Average,
    var: f64,
}

impl Variance {
    pub fn new() -> Self {
        Self {
            avg: Average::new(),
            var: 0.0,
        }
    }

    pub fn add(&mut self, value: impl Into<f64>) {
        let value = value.into();
        let left = value - self.avg.average();
        self.avg.add(value);
        let right = value - self.avg.average();
        self.var += left * right;
    }

    /// The variance of the samples as a complete population, i.e., divided by `n`
    pub fn population_variance(&self) -> f64 {
        let k = self.avg.count();
        if k <= 0.0 {
            return 0.0;
        }
        self.var / k
    }
}

impl Default for Variance {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Into<f64>> Extend<A> for Variance {
    fn extend<T: IntoIterator<Item = A>>(&mut self, iter: T) {
        iter.into_iter().for_each(|a| self.add(a))
    }
}
